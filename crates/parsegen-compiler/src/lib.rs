//! parsegen compiler: grammar to standalone Rust parser module.
//!
//! The pipeline has three stages:
//! - `inspect` - read-only access to the grammar ([`parsegen_core::GrammarInspector`])
//! - `encode` - productions lowered to symbol-table references
//! - `emit` - tables and productions rendered into a fixed module skeleton
//!
//! # Example
//!
//! ```
//! use parsegen_compiler::{Config, generate_to_string};
//! use parsegen_core::{GrammarBuilder, Literal};
//!
//! let mut b = GrammarBuilder::<char>::new("start");
//! b.rule("start", vec![
//!     vec![Literal::Terminal('a'), Literal::Terminal('b')],
//!     vec![Literal::Epsilon],
//! ]).unwrap();
//! let grammar = b.build();
//!
//! let source = generate_to_string(&grammar, &Config::new("Ab")).unwrap().unwrap();
//! assert!(source.contains("q.add(nt(0), (t(1) + t(2)) | nul());"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::Write;

use log::debug;
use parsegen_core::{Grammar, GrammarError, TerminalChar};

pub mod config;
pub mod emit;
pub mod encode;
mod provenance;

#[cfg(test)]
mod encode_tests;

pub use config::{Config, Provenance};
pub use emit::Emitter;
pub use encode::{EncodedProduction, SymbolRef, encode};

/// Errors that can occur during parser generation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("`{name}` cannot name the generated parser type: {reason}")]
    InvalidModuleName { name: String, reason: &'static str },

    #[error("failed to write generated parser: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;

/// Render the parser module for `grammar`.
///
/// Returns `None` for a grammar without productions. The module name is
/// checked first, so an unusable name is reported even then.
pub fn generate_to_string<C: TerminalChar>(
    grammar: &Grammar<C>,
    config: &Config,
) -> Result<Option<String>> {
    config.validate()?;
    if grammar.inspect().is_empty() {
        debug!("grammar `{}` has no productions, nothing to emit", config.module_name);
        return Ok(None);
    }
    Ok(Some(Emitter::new(grammar, config)?.emit()))
}

/// Generate the parser module for `grammar` into `out`.
///
/// The document is rendered completely before the single write, so `out`
/// either receives the whole module or nothing. Returns `false` when the
/// grammar has no productions and nothing was written.
pub fn generate<C: TerminalChar, W: Write + ?Sized>(
    grammar: &Grammar<C>,
    config: &Config,
    out: &mut W,
) -> Result<bool> {
    let Some(source) = generate_to_string(grammar, config)? else {
        return Ok(false);
    };
    out.write_all(source.as_bytes())?;
    out.flush()?;
    Ok(true)
}

/// Build a grammar from its JSON description and render its parser module.
///
/// Unless `config` names another provenance, the JSON text itself is quoted
/// in the header.
pub fn generate_from_json<C: TerminalChar>(json: &str, config: &Config) -> Result<Option<String>> {
    let grammar = Grammar::<C>::from_json(json)?;
    if config.provenance.is_none() {
        let config = config.clone().provenance_text(json);
        return generate_to_string(&grammar, &config);
    }
    generate_to_string(&grammar, config)
}
