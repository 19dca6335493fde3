//! Grammar types for context-free grammars over single-character terminals.
//!
//! This module provides the grammar model consumed by the code generator,
//! a programmatic builder, and a JSON interchange format.

mod builder;
mod json;
mod types;

#[cfg(test)]
mod json_tests;

pub use builder::GrammarBuilder;
pub use json::GrammarError;
pub use types::{Alternative, CharClass, Grammar, Literal, Nonterminals, Production};
