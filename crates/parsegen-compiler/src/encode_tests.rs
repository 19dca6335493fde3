use std::collections::BTreeMap;

use parsegen_core::{
    Grammar, GrammarBuilder, Literal, NonterminalId, Nonterminals, Production, TerminalId,
    TerminalTable,
};

use crate::encode::{EncodedProduction, SymbolRef, encode};

fn nt(id: u32) -> SymbolRef {
    SymbolRef::Nonterminal(NonterminalId::from_raw(id))
}

fn t(id: u32) -> SymbolRef {
    SymbolRef::Terminal(TerminalId::from_raw(id))
}

fn ab_or_empty() -> Grammar<char> {
    let mut b = GrammarBuilder::new("start");
    b.rule(
        "start",
        vec![
            vec![Literal::Terminal('a'), Literal::Terminal('b')],
            vec![Literal::Epsilon],
        ],
    )
    .unwrap();
    b.build()
}

#[test]
fn encodes_concatenation_and_epsilon() {
    let grammar = ab_or_empty();
    let mut terminals = TerminalTable::new();

    let encoded = encode(&grammar.inspect(), &mut terminals);

    assert_eq!(
        encoded,
        vec![EncodedProduction {
            lhs: NonterminalId::from_raw(0),
            alternatives: vec![vec![t(1), t(2)], vec![SymbolRef::Null]],
        }]
    );
    assert_eq!(terminals.values(), &['\0', 'a', 'b']);
}

#[test]
fn terminals_are_shared_across_productions() {
    let mut b = GrammarBuilder::<u8>::new("start");
    let list = b.nt("list");
    b.rule(
        "start",
        vec![vec![
            Literal::Terminal(b'['),
            Literal::Nonterminal(list),
            Literal::Terminal(b']'),
        ]],
    )
    .unwrap();
    b.rule(
        "list",
        vec![
            vec![Literal::Terminal(b'x'), Literal::Terminal(b','), Literal::Nonterminal(list)],
            vec![Literal::Terminal(b'x')],
            vec![Literal::Terminal(b'[')],
        ],
    )
    .unwrap();
    let grammar = b.build();
    let mut terminals = TerminalTable::new();

    let encoded = encode(&grammar.inspect(), &mut terminals);

    assert_eq!(terminals.values(), b"\0[]x,");
    assert_eq!(encoded[0].alternatives, vec![vec![t(1), nt(1), t(2)]]);
    assert_eq!(
        encoded[1].alternatives,
        vec![vec![t(3), t(4), nt(1)], vec![t(3)], vec![t(1)]]
    );
}

#[test]
fn embedded_ids_resolve_to_the_original_symbols() {
    let mut b = GrammarBuilder::<char>::new("expr");
    let expr = b.nt("expr");
    let term = b.nt("term");
    let digit = b.char_class("digit").unwrap();
    b.rule(
        "expr",
        vec![
            vec![Literal::Nonterminal(term), Literal::Terminal('+'), Literal::Nonterminal(term)],
            vec![Literal::Nonterminal(term)],
        ],
    )
    .unwrap();
    b.rule(
        "term",
        vec![
            vec![Literal::Terminal('('), Literal::Nonterminal(expr), Literal::Terminal(')')],
            vec![Literal::Nonterminal(digit)],
            vec![Literal::Terminal('\\'), Literal::Terminal('\'')],
        ],
    )
    .unwrap();
    let grammar = b.build();
    let gi = grammar.inspect();
    let mut terminals = TerminalTable::new();

    let encoded = encode(&gi, &mut terminals);

    for (production, lowered) in gi.productions().iter().zip(&encoded) {
        assert_eq!(production.lhs, lowered.lhs);
        for (alt, lowered_alt) in production.alternatives.iter().zip(&lowered.alternatives) {
            assert_eq!(alt.len(), lowered_alt.len());
            for (literal, symbol) in alt.iter().zip(lowered_alt) {
                match (literal, symbol) {
                    (Literal::Nonterminal(id), SymbolRef::Nonterminal(ref_id)) => {
                        assert_eq!(id, ref_id)
                    }
                    (Literal::Terminal(value), SymbolRef::Terminal(ref_id)) => {
                        assert_eq!(*value, terminals.resolve(*ref_id))
                    }
                    (Literal::Epsilon, SymbolRef::Null) => {}
                    other => panic!("mismatched encoding: {other:?}"),
                }
            }
        }
    }
}

#[test]
fn empty_alternative_denotes_empty_string() {
    let mut b = GrammarBuilder::<char>::new("start");
    b.rule("start", vec![vec![Literal::Terminal('a')], vec![]]).unwrap();
    let grammar = b.build();
    let mut terminals = TerminalTable::new();

    let encoded = encode(&grammar.inspect(), &mut terminals);

    assert_eq!(encoded[0].alternatives, vec![vec![t(1)], vec![SymbolRef::Null]]);
}

#[test]
fn sentinel_survives_grammars_without_terminals() {
    let mut b = GrammarBuilder::<char>::new("start");
    let other = b.nt("other");
    b.rule("start", vec![vec![Literal::Nonterminal(other)]]).unwrap();
    b.rule("other", vec![vec![Literal::Epsilon]]).unwrap();
    let grammar = b.build();
    let mut terminals = TerminalTable::new();

    encode(&grammar.inspect(), &mut terminals);

    assert_eq!(terminals.values(), &['\0']);
}

#[test]
fn encoding_twice_is_identical() {
    let grammar = ab_or_empty();

    let mut first_table = TerminalTable::new();
    let first = encode(&grammar.inspect(), &mut first_table);
    let mut second_table = TerminalTable::new();
    let second = encode(&grammar.inspect(), &mut second_table);

    assert_eq!(first, second);
    assert_eq!(first_table.values(), second_table.values());
}

#[test]
#[should_panic(expected = "nonterminal id 3 not found")]
fn dangling_reference_is_fatal() {
    let nonterminals: Nonterminals = ["start"].into_iter().collect();
    let grammar = Grammar::<char>::from_parts(
        NonterminalId::from_raw(0),
        nonterminals,
        vec![Production::new(
            NonterminalId::from_raw(0),
            vec![vec![Literal::Nonterminal(NonterminalId::from_raw(3))]],
        )],
        BTreeMap::new(),
    );

    encode(&grammar.inspect(), &mut TerminalTable::new());
}

#[test]
#[should_panic(expected = "production for `start` has no alternatives")]
fn empty_alternation_is_fatal() {
    let nonterminals: Nonterminals = ["start"].into_iter().collect();
    let grammar = Grammar::<char>::from_parts(
        NonterminalId::from_raw(0),
        nonterminals,
        vec![Production::new(NonterminalId::from_raw(0), Vec::new())],
        BTreeMap::new(),
    );

    encode(&grammar.inspect(), &mut TerminalTable::new());
}
