//! Grammar type definitions.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;

use crate::{GrammarInspector, NonterminalId, TerminalChar};

use super::GrammarError;

/// Ordered nonterminal name table.
///
/// The id of a nonterminal is its position in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Nonterminals {
    names: IndexSet<String>,
}

impl Nonterminals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning its id.
    /// If the name was already declared, returns the existing id.
    pub fn get(&mut self, name: &str) -> NonterminalId {
        if let Some(index) = self.names.get_index_of(name) {
            return NonterminalId::from_raw(index as u32);
        }
        let (index, _) = self.names.insert_full(name.to_owned());
        NonterminalId::from_raw(index as u32)
    }

    /// Look up a declared name without interning it.
    pub fn lookup(&self, name: &str) -> Option<NonterminalId> {
        self.names
            .get_index_of(name)
            .map(|index| NonterminalId::from_raw(index as u32))
    }

    /// Name of a nonterminal, or `None` if the id is not in the table.
    #[inline]
    pub fn name(&self, id: NonterminalId) -> Option<&str> {
        self.names.get_index(id.index()).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all nonterminals in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (NonterminalId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (NonterminalId::from_raw(i as u32), s.as_str()))
    }
}

impl<'a> FromIterator<&'a str> for Nonterminals {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut table = Self::new();
        for name in iter {
            table.get(name);
        }
        table
    }
}

/// One symbol on the right-hand side of a production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Literal<C> {
    /// Reference to a nonterminal.
    Nonterminal(NonterminalId),
    /// A single terminal character.
    Terminal(C),
    /// The empty string.
    Epsilon,
}

impl<C> Literal<C> {
    pub fn is_epsilon(&self) -> bool {
        matches!(self, Literal::Epsilon)
    }
}

/// Concatenation of literals.
pub type Alternative<C> = Vec<Literal<C>>;

/// A nonterminal bound to an alternation of concatenations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production<C> {
    pub lhs: NonterminalId,
    pub alternatives: Vec<Alternative<C>>,
}

impl<C> Production<C> {
    pub fn new(lhs: NonterminalId, alternatives: Vec<Alternative<C>>) -> Self {
        Self { lhs, alternatives }
    }
}

/// Predefined character classes a predicate nonterminal can recognize.
///
/// The recognizers themselves live in the parse engine; the grammar only
/// records which nonterminals stand for which class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharClass {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Printable,
    Punct,
    Space,
    Upper,
    Xdigit,
    Eof,
}

impl CharClass {
    pub const ALL: [CharClass; 13] = [
        CharClass::Alnum,
        CharClass::Alpha,
        CharClass::Blank,
        CharClass::Cntrl,
        CharClass::Digit,
        CharClass::Graph,
        CharClass::Lower,
        CharClass::Printable,
        CharClass::Punct,
        CharClass::Space,
        CharClass::Upper,
        CharClass::Xdigit,
        CharClass::Eof,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CharClass::Alnum => "alnum",
            CharClass::Alpha => "alpha",
            CharClass::Blank => "blank",
            CharClass::Cntrl => "cntrl",
            CharClass::Digit => "digit",
            CharClass::Graph => "graph",
            CharClass::Lower => "lower",
            CharClass::Printable => "printable",
            CharClass::Punct => "punct",
            CharClass::Space => "space",
            CharClass::Upper => "upper",
            CharClass::Xdigit => "xdigit",
            CharClass::Eof => "eof",
        }
    }
}

impl FromStr for CharClass {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| GrammarError::UnknownCharClass(s.to_owned()))
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete grammar, read-only once built.
///
/// Fields are only reachable through [`GrammarInspector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar<C> {
    pub(crate) start: NonterminalId,
    pub(crate) nonterminals: Nonterminals,
    /// Productions, preserving declaration order.
    pub(crate) productions: Vec<Production<C>>,
    /// Predicate nonterminals, keyed (and therefore ordered) by id.
    pub(crate) char_classes: BTreeMap<NonterminalId, CharClass>,
}

impl<C: TerminalChar> Grammar<C> {
    /// Assemble a grammar from already-resolved parts.
    ///
    /// No cross-checking is done: every id in `productions`, `start` and
    /// `char_classes` must be present in `nonterminals`. Prefer
    /// [`GrammarBuilder`](super::GrammarBuilder), which interns every name
    /// it is given.
    pub fn from_parts(
        start: NonterminalId,
        nonterminals: Nonterminals,
        productions: Vec<Production<C>>,
        char_classes: BTreeMap<NonterminalId, CharClass>,
    ) -> Self {
        Self {
            start,
            nonterminals,
            productions,
            char_classes,
        }
    }

    /// Read-only view over this grammar.
    pub fn inspect(&self) -> GrammarInspector<'_, C> {
        GrammarInspector::new(self)
    }
}
