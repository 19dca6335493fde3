//! Provenance header: which grammar a generated module came from.

use std::fs;

use log::debug;

use crate::config::{Config, Provenance};

/// Render the comment block opening every generated module.
///
/// The grammar source is quoted line by line (see [`comment_lines`]). A file
/// that cannot be read quotes nothing.
pub(crate) fn render_header(config: &Config) -> String {
    let mut out = String::new();
    out.push_str(&format!("// This file is generated by {}\n", config.generator_tag));

    let (label, source) = match &config.provenance {
        Provenance::None => (None, None),
        Provenance::File(path) => {
            let label = path.display().to_string();
            let source = fs::read_to_string(path)
                .inspect_err(|e| debug!("cannot quote grammar source {label}: {e}"))
                .ok();
            (Some(label), source)
        }
        Provenance::Text(text) => (Some("<inline>".to_string()), Some(text.clone())),
    };

    match &label {
        Some(label) => out.push_str(&format!(
            "// from the grammar {} in: {label}\n",
            config.module_name
        )),
        None => out.push_str(&format!("// from the grammar {}\n", config.module_name)),
    }

    if let Some(label) = label {
        out.push_str(&format!("// The content of {label} is:\n"));
        out.push_str(&comment_lines(source.as_deref().unwrap_or_default()));
    }

    out
}

/// Prefix every line of `text` with `// `.
///
/// Line ends are normalized to `\n` and empty lines become a bare `//`.
pub(crate) fn comment_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for line in text.lines() {
        if line.is_empty() {
            out.push_str("//\n");
        } else {
            out.push_str("// ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
