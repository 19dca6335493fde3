#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for parsegen.
//!
//! Three layers:
//! - **Grammar model**: nonterminal table, productions and character-class
//!   predicates, assembled by [`GrammarBuilder`] or read from JSON
//! - **Inspection**: [`GrammarInspector`], the read-only view the code
//!   generator works from
//! - **Symbol tables**: [`TerminalTable`], which assigns dense terminal
//!   indices in first-use order and renders them as source literals

use std::fmt;
use std::hash::Hash;

pub mod grammar;
mod inspector;
mod invariants;
pub mod literal;
mod terminals;
pub mod utils;


pub use grammar::{
    Alternative, CharClass, Grammar, GrammarBuilder, GrammarError, Literal, Nonterminals,
    Production,
};
pub use inspector::GrammarInspector;
pub use terminals::{TerminalId, TerminalTable};

/// Result type for grammar construction.
pub type Result<T> = std::result::Result<T, GrammarError>;

// ============================================================================
// Identifiers
// ============================================================================

/// Dense index of a nonterminal in declaration order.
///
/// Ids are assigned by [`Nonterminals::get`]; the id of a nonterminal is its
/// position in the table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct NonterminalId(u32);

impl NonterminalId {
    /// Raw index for rendering/debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Create an id from a raw index. The caller guarantees it is in the table.
    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl fmt::Display for NonterminalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Character Width
// ============================================================================

/// Width of the terminal alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharWidth {
    /// Byte-sized terminals (`u8`).
    Narrow,
    /// Unicode scalar terminals (`char`).
    Wide,
}

impl CharWidth {
    /// Name of the Rust type holding one terminal.
    pub fn rust_type(self) -> &'static str {
        match self {
            CharWidth::Narrow => "u8",
            CharWidth::Wide => "char",
        }
    }

    /// Marker prepended to every character literal.
    ///
    /// Rust character literals are wide by default, so the narrow mode is
    /// the one carrying a marker (`b'a'`).
    pub fn literal_prefix(self) -> &'static str {
        match self {
            CharWidth::Narrow => "b",
            CharWidth::Wide => "",
        }
    }
}

impl fmt::Display for CharWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharWidth::Narrow => f.write_str("narrow"),
            CharWidth::Wide => f.write_str("wide"),
        }
    }
}

/// A character type usable as a grammar terminal.
pub trait TerminalChar: Copy + Eq + Hash + Ord + fmt::Debug + 'static {
    const WIDTH: CharWidth;

    /// Sentinel stored at terminal index 0.
    const NUL: Self;

    /// Convert from a Unicode scalar, if representable in this width.
    fn from_char(ch: char) -> Option<Self>;

    fn to_char(self) -> char;
}

impl TerminalChar for u8 {
    const WIDTH: CharWidth = CharWidth::Narrow;
    const NUL: Self = 0;

    /// Only ASCII maps to a byte; anything else spans several bytes of UTF-8.
    fn from_char(ch: char) -> Option<Self> {
        ch.is_ascii().then_some(ch as u8)
    }

    fn to_char(self) -> char {
        char::from(self)
    }
}

impl TerminalChar for char {
    const WIDTH: CharWidth = CharWidth::Wide;
    const NUL: Self = '\0';

    fn from_char(ch: char) -> Option<Self> {
        Some(ch)
    }

    fn to_char(self) -> char {
        self
    }
}
