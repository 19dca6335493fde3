//! Programmatic grammar construction.

use std::collections::BTreeMap;

use log::trace;

use crate::{NonterminalId, Result, TerminalChar};

use super::GrammarError;
use super::types::{Alternative, CharClass, Grammar, Literal, Nonterminals, Production};

/// Builds a [`Grammar`] one production at a time.
///
/// Nonterminal ids follow first mention. The start symbol is declared when
/// the builder is created, so it always gets id 0.
///
/// ```
/// use parsegen_core::{GrammarBuilder, Literal};
///
/// let mut b = GrammarBuilder::<char>::new("start");
/// b.rule("start", vec![
///     vec![Literal::Terminal('a'), Literal::Terminal('b')],
///     vec![Literal::Epsilon],
/// ])?;
/// let grammar = b.build();
/// assert_eq!(grammar.inspect().len(), 1);
/// # Ok::<(), parsegen_core::GrammarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct GrammarBuilder<C> {
    start: NonterminalId,
    nonterminals: Nonterminals,
    productions: Vec<Production<C>>,
    char_classes: BTreeMap<NonterminalId, CharClass>,
}

impl<C: TerminalChar> GrammarBuilder<C> {
    pub fn new(start: &str) -> Self {
        let mut nonterminals = Nonterminals::new();
        let start = nonterminals.get(start);
        Self {
            start,
            nonterminals,
            productions: Vec::new(),
            char_classes: BTreeMap::new(),
        }
    }

    /// Declare (or look up) a nonterminal by name.
    pub fn nt(&mut self, name: &str) -> NonterminalId {
        self.nonterminals.get(name)
    }

    /// Declare a predicate nonterminal recognizing the predefined class `name`.
    pub fn char_class(&mut self, name: &str) -> Result<NonterminalId> {
        let class: CharClass = name.parse()?;
        let id = self.nonterminals.get(name);
        self.char_classes.insert(id, class);
        Ok(id)
    }

    /// Append a production for `lhs`.
    ///
    /// Several productions may share a left-hand side; they are kept apart,
    /// in the order they were added. A production needs at least one
    /// alternative (an empty alternative stands for the empty string), and
    /// every nonterminal it mentions must come from this builder.
    pub fn rule(&mut self, lhs: &str, alternatives: Vec<Alternative<C>>) -> Result<&mut Self> {
        if alternatives.is_empty() {
            return Err(GrammarError::NoAlternatives(lhs.to_owned()));
        }
        let dangling = alternatives.iter().flatten().find_map(|literal| match *literal {
            Literal::Nonterminal(id) if self.nonterminals.name(id).is_none() => Some(id),
            _ => None,
        });
        if let Some(id) = dangling {
            return Err(GrammarError::UndeclaredNonterminal {
                rule: lhs.to_owned(),
                id,
            });
        }

        let lhs = self.nonterminals.get(lhs);
        trace!(
            "rule #{} for nonterminal {lhs} with {} alternatives",
            self.productions.len(),
            alternatives.len()
        );
        self.productions.push(Production::new(lhs, alternatives));
        Ok(self)
    }

    pub fn build(self) -> Grammar<C> {
        Grammar::from_parts(
            self.start,
            self.nonterminals,
            self.productions,
            self.char_classes,
        )
    }
}
