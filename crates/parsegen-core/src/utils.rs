/// Convert snake_case or kebab-case to PascalCase.
///
/// Normalizes words separated by `_`, `-`, `.` or spaces. If the input is
/// already PascalCase (starts uppercase, no separators), it is returned
/// unchanged.
///
/// # Examples
/// ```
/// use parsegen_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("foo_bar"), "FooBar");
/// assert_eq!(to_pascal_case("FOO_BAR"), "FooBar");
/// assert_eq!(to_pascal_case("FooBar"), "FooBar");  // idempotent
/// ```
pub fn to_pascal_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.' | ' ')
    }

    let has_separator = s.chars().any(is_separator);
    let has_lowercase = s.chars().any(|c| c.is_ascii_lowercase());
    let starts_uppercase = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());

    // Already PascalCase: starts uppercase, has lowercase, no separators
    if starts_uppercase && has_lowercase && !has_separator {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Turn a nonterminal name into a Rust type-level identifier.
///
/// Characters that cannot appear in an identifier act as word separators.
/// Names that end up empty, start with a digit, or collide with `Self` are
/// prefixed with `Nt`. Uniqueness is the caller's concern.
///
/// # Examples
/// ```
/// use parsegen_core::utils::to_type_ident;
/// assert_eq!(to_type_ident("expr_list"), "ExprList");
/// assert_eq!(to_type_ident("2nd"), "Nt2nd");
/// assert_eq!(to_type_ident("+"), "Nt");
/// ```
pub fn to_type_ident(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    let ident = to_pascal_case(&cleaned);

    let needs_prefix = ident.is_empty()
        || ident.starts_with(|c: char| c.is_ascii_digit())
        || ident == "Self";
    if needs_prefix {
        format!("Nt{ident}")
    } else {
        ident
    }
}
