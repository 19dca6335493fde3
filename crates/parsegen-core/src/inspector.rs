//! Read-only access to a built grammar.

use std::collections::BTreeMap;

use crate::{CharClass, Grammar, NonterminalId, Nonterminals, Production, TerminalChar};

/// Read-only view of a [`Grammar`].
///
/// This is the only way to read a grammar's internals. It hands out shared
/// references and never mutates the grammar.
#[derive(Debug)]
pub struct GrammarInspector<'g, C> {
    grammar: &'g Grammar<C>,
}

impl<C> Clone for GrammarInspector<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for GrammarInspector<'_, C> {}

impl<'g, C: TerminalChar> GrammarInspector<'g, C> {
    pub fn new(grammar: &'g Grammar<C>) -> Self {
        Self { grammar }
    }

    #[inline]
    pub fn start(&self) -> NonterminalId {
        self.grammar.start
    }

    /// Nonterminal table in declaration order.
    #[inline]
    pub fn nonterminals(&self) -> &'g Nonterminals {
        &self.grammar.nonterminals
    }

    /// Productions in declaration order.
    #[inline]
    pub fn productions(&self) -> &'g [Production<C>] {
        &self.grammar.productions
    }

    /// Predicate nonterminals and the class each one recognizes.
    #[inline]
    pub fn char_classes(&self) -> &'g BTreeMap<NonterminalId, CharClass> {
        &self.grammar.char_classes
    }

    /// Name of a nonterminal.
    ///
    /// # Panics
    /// Panics if `id` is not in the nonterminal table.
    pub fn nonterminal_name(&self, id: NonterminalId) -> &'g str {
        self.ensure_nonterminal(id)
    }

    /// Names of predicate nonterminals in table order, skipping empty names.
    pub fn predicate_names(&self) -> impl Iterator<Item = &'g str> + use<'g, C> {
        let inspector = *self;
        self.grammar
            .char_classes
            .keys()
            .map(move |&id| inspector.ensure_nonterminal(id))
            .filter(|name| !name.is_empty())
    }

    /// Number of productions.
    #[inline]
    pub fn len(&self) -> usize {
        self.grammar.productions.len()
    }

    /// Whether the grammar has no productions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grammar.productions.is_empty()
    }
}
