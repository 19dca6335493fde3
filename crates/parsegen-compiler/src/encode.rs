//! Production encoding.
//!
//! Lowers every production to symbol-table references. Terminals are interned
//! into the run's [`TerminalTable`] on first use, so the ids embedded here are
//! exactly the positions the terminal table will render with.

use log::trace;
use parsegen_core::{
    GrammarInspector, Literal, NonterminalId, Production, TerminalChar, TerminalId, TerminalTable,
};

/// A reference into the generated symbol tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolRef {
    Nonterminal(NonterminalId),
    Terminal(TerminalId),
    /// The empty string.
    Null,
}

/// A production lowered to table references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedProduction {
    pub lhs: NonterminalId,
    /// Alternation of concatenations, in declaration order.
    pub alternatives: Vec<Vec<SymbolRef>>,
}

/// Encode all productions of a grammar, in declaration order.
///
/// # Panics
/// Panics if a production mentions a nonterminal id missing from the table,
/// or has no alternatives at all.
pub fn encode<C: TerminalChar>(
    inspector: &GrammarInspector<'_, C>,
    terminals: &mut TerminalTable<C>,
) -> Vec<EncodedProduction> {
    inspector
        .productions()
        .iter()
        .map(|production| encode_production(inspector, production, terminals))
        .collect()
}

fn encode_production<C: TerminalChar>(
    inspector: &GrammarInspector<'_, C>,
    production: &Production<C>,
    terminals: &mut TerminalTable<C>,
) -> EncodedProduction {
    let name = inspector.nonterminal_name(production.lhs);
    assert!(
        !production.alternatives.is_empty(),
        "Grammar: production for `{name}` has no alternatives"
    );
    trace!(
        "encode `{name}` ({} alternatives)",
        production.alternatives.len()
    );

    let alternatives = production
        .alternatives
        .iter()
        .map(|alt| encode_alternative(inspector, alt, terminals))
        .collect();

    EncodedProduction {
        lhs: production.lhs,
        alternatives,
    }
}

fn encode_alternative<C: TerminalChar>(
    inspector: &GrammarInspector<'_, C>,
    alternative: &[Literal<C>],
    terminals: &mut TerminalTable<C>,
) -> Vec<SymbolRef> {
    if alternative.is_empty() {
        return vec![SymbolRef::Null];
    }

    alternative
        .iter()
        .map(|literal| match *literal {
            Literal::Nonterminal(id) => {
                // dangling ids abort here, before anything is rendered
                inspector.nonterminal_name(id);
                SymbolRef::Nonterminal(id)
            }
            Literal::Terminal(value) => SymbolRef::Terminal(terminals.intern(value)),
            Literal::Epsilon => SymbolRef::Null,
        })
        .collect()
}
