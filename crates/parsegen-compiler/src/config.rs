//! Configuration types for parser generation.

use std::path::PathBuf;

use crate::{Error, Result};

/// Engine crate path used when none is configured.
pub const DEFAULT_ENGINE_PATH: &str = "parser_engine";

/// Type-namespace names the generated module defines or refers to.
const RESERVED_MODULE_NAMES: &[&str] = &[
    "Nonterminal",
    "Default",
    "Option",
    "Box",
    "engine",
    "std",
    "bool",
    "char",
    "str",
    "u8",
    "usize",
];

const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Where the grammar definition quoted in the generated header comes from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Provenance {
    /// No grammar source is quoted.
    #[default]
    None,
    /// Read the grammar source from a file. An unreadable file quotes nothing.
    File(PathBuf),
    /// Quote in-memory grammar text.
    Text(String),
}

impl Provenance {
    pub fn is_none(&self) -> bool {
        matches!(self, Provenance::None)
    }
}

/// Configuration for parser generation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the generated wrapper type
    pub(crate) module_name: String,
    /// Path of the parse engine crate the generated module imports
    pub(crate) engine_path: String,
    /// Grammar source quoted in the header
    pub(crate) provenance: Provenance,
    /// Generator name written on the first header line
    pub(crate) generator_tag: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_name: "Parser".to_string(),
            engine_path: DEFAULT_ENGINE_PATH.to_string(),
            provenance: Provenance::default(),
            generator_tag: "parsegen".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config for a wrapper named `module_name`.
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            ..Self::default()
        }
    }

    /// Set the path of the parse engine crate.
    pub fn engine_path(mut self, value: impl Into<String>) -> Self {
        self.engine_path = value.into();
        self
    }

    /// Set the grammar source quoted in the header.
    pub fn provenance(mut self, value: Provenance) -> Self {
        self.provenance = value;
        self
    }

    /// Quote the grammar definition stored at `path`.
    pub fn provenance_file(self, path: impl Into<PathBuf>) -> Self {
        self.provenance(Provenance::File(path.into()))
    }

    /// Quote in-memory grammar text.
    pub fn provenance_text(self, text: impl Into<String>) -> Self {
        self.provenance(Provenance::Text(text.into()))
    }

    /// Set the generator name written in the header.
    pub fn generator_tag(mut self, value: impl Into<String>) -> Self {
        self.generator_tag = value.into();
        self
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// Check that the module name can name the generated wrapper type.
    ///
    /// The name must be an ASCII identifier that is neither a keyword nor one
    /// of the names the generated module already uses.
    pub fn validate(&self) -> Result<()> {
        let name = self.module_name.as_str();
        let reason = if !is_ascii_ident(name) {
            "not an ASCII identifier"
        } else if KEYWORDS.contains(&name) {
            "it is a keyword"
        } else if RESERVED_MODULE_NAMES.contains(&name) {
            "it is already used by the generated module"
        } else {
            return Ok(());
        };
        Err(Error::InvalidModuleName {
            name: name.to_owned(),
            reason,
        })
    }
}

fn is_ascii_ident(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first.is_ascii_alphabetic())
        && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        && name != "_"
}
