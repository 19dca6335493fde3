//! Rendering terminals as Rust character literals.
//!
//! Wide terminals render as `char` literals (`'a'`), narrow ones as byte
//! literals (`b'a'`). The six characters below always use their short
//! escape:
//!
//! | char | rendered |
//! |------|----------|
//! | NUL  | `'\0'`   |
//! | CR   | `'\r'`   |
//! | LF   | `'\n'`   |
//! | TAB  | `'\t'`   |
//! | `\`  | `'\\'`   |
//! | `'`  | `'\''`   |
//!
//! Any other control character, and in narrow mode any byte above 0x7f,
//! uses a numeric escape so the output always lexes.

use std::fmt::Write;

use crate::{CharWidth, TerminalChar};

/// Render one terminal as a source literal.
pub fn render_literal<C: TerminalChar>(value: C) -> String {
    render_char(value.to_char(), C::WIDTH)
}

/// Render a character as a literal of the given width.
///
/// Narrow mode expects `ch <= '\u{ff}'`; wider characters cannot come from a
/// `u8` terminal.
pub(crate) fn render_char(ch: char, width: CharWidth) -> String {
    debug_assert!(
        width == CharWidth::Wide || u32::from(ch) <= 0xff,
        "narrow literal for {ch:?} does not fit in a byte"
    );
    let mut out = String::with_capacity(8);
    out.push_str(width.literal_prefix());
    out.push('\'');
    push_escaped(&mut out, ch, width);
    out.push('\'');
    out
}

fn push_escaped(out: &mut String, ch: char, width: CharWidth) {
    match ch {
        '\0' => out.push_str("\\0"),
        '\r' => out.push_str("\\r"),
        '\n' => out.push_str("\\n"),
        '\t' => out.push_str("\\t"),
        '\\' => out.push_str("\\\\"),
        '\'' => out.push_str("\\'"),
        c if width == CharWidth::Narrow && (!c.is_ascii() || c.is_ascii_control()) => {
            let _ = write!(out, "\\x{:02x}", c as u32);
        }
        c if width == CharWidth::Wide && c.is_control() => {
            let _ = write!(out, "\\u{{{:x}}}", c as u32);
        }
        c => out.push(c),
    }
}
