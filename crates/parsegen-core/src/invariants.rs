//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{GrammarInspector, NonterminalId, TerminalChar, TerminalId, TerminalTable};

impl<'g, C: TerminalChar> GrammarInspector<'g, C> {
    pub(crate) fn ensure_nonterminal(&self, id: NonterminalId) -> &'g str {
        let nonterminals = self.nonterminals();
        nonterminals.name(id).unwrap_or_else(|| {
            panic!(
                "Grammar: nonterminal id {id} not found in a table of {} \
                 (grammar builder must declare every referenced nonterminal)",
                nonterminals.len()
            )
        })
    }
}

impl<C: TerminalChar> TerminalTable<C> {
    pub(crate) fn ensure_terminal(&self, id: TerminalId) -> C {
        self.get(id).unwrap_or_else(|| {
            panic!(
                "TerminalTable: terminal id {} not found in a table of {} \
                 (ids must come from this table's intern)",
                id.as_u32(),
                self.len()
            )
        })
    }
}
