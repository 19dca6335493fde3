use indoc::indoc;

use super::*;
use crate::{CharWidth, NonterminalId};

#[test]
fn parse_minimal_grammar() {
    let json = indoc! {r#"
        {
            "start": "start",
            "rules": [
                { "lhs": "start", "alternatives": [
                    [ {"type": "TERMINAL", "value": "a"}, {"type": "TERMINAL", "value": "b"} ],
                    [ {"type": "NULL"} ]
                ]}
            ]
        }
    "#};

    let grammar = Grammar::<char>::from_json(json).unwrap();
    let gi = grammar.inspect();

    assert_eq!(gi.nonterminals().len(), 1);
    assert_eq!(
        gi.productions()[0].alternatives,
        vec![
            vec![Literal::Terminal('a'), Literal::Terminal('b')],
            vec![Literal::Epsilon],
        ]
    );
}

#[test]
fn ids_follow_start_then_classes_then_rules() {
    let json = indoc! {r#"
        {
            "start": "start",
            "char_classes": ["digit"],
            "rules": [
                { "lhs": "number", "alternatives": [
                    [ {"type": "NONTERMINAL", "name": "digit"}, {"type": "NONTERMINAL", "name": "number"} ],
                    [ {"type": "NONTERMINAL", "name": "digit"} ]
                ]},
                { "lhs": "start", "alternatives": [
                    [ {"type": "NONTERMINAL", "name": "number"}, {"type": "NONTERMINAL", "name": "suffix"} ]
                ]}
            ]
        }
    "#};

    let grammar = Grammar::<u8>::from_json(json).unwrap();
    let names: Vec<_> = grammar
        .inspect()
        .nonterminals()
        .iter()
        .map(|(_, name)| name.to_owned())
        .collect();

    assert_eq!(names, ["start", "digit", "number", "suffix"]);
    assert_eq!(grammar.inspect().productions()[0].lhs, NonterminalId::from_raw(2));
}

#[test]
fn rejects_multi_character_terminal() {
    let json = r#"{
        "start": "start",
        "rules": [
            { "lhs": "start", "alternatives": [[ {"type": "TERMINAL", "value": "ab"} ]] }
        ]
    }"#;

    let err = Grammar::<char>::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        GrammarError::InvalidTerminal { ref rule, ref value, width: CharWidth::Wide }
            if rule == "start" && value == "ab"
    ));
}

#[test]
fn rejects_wide_terminal_in_narrow_grammar() {
    let json = r#"{
        "start": "start",
        "rules": [
            { "lhs": "start", "alternatives": [[ {"type": "TERMINAL", "value": "λ"} ]] }
        ]
    }"#;

    let err = Grammar::<u8>::from_json(json).unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"terminal "λ" in rule `start` is not a single narrow character"#
    );

    assert!(Grammar::<char>::from_json(json).is_ok());
}

#[test]
fn rejects_unknown_char_class() {
    let json = r#"{ "start": "start", "char_classes": ["vowel"] }"#;

    let err = Grammar::<char>::from_json(json).unwrap_err();
    assert!(matches!(err, GrammarError::UnknownCharClass(_)));
}

#[test]
fn reports_malformed_json() {
    let err = Grammar::<char>::from_json("{ \"start\": ").unwrap_err();
    assert!(matches!(err, GrammarError::Json(_)));
}

#[test]
fn rules_default_to_empty() {
    let grammar = Grammar::<char>::from_json(r#"{ "start": "start" }"#).unwrap();
    assert!(grammar.inspect().is_empty());
}

#[test]
fn rejects_rule_without_alternatives() {
    let json = r#"{ "start": "start", "rules": [ { "lhs": "start", "alternatives": [] } ] }"#;

    let err = Grammar::<char>::from_json(json).unwrap_err();
    assert_eq!(err.to_string(), "rule `start` has no alternatives");
}

#[test]
fn rejects_latin1_terminal_in_narrow_grammar() {
    let json = r#"{
        "start": "start",
        "rules": [
            { "lhs": "start", "alternatives": [[ {"type": "TERMINAL", "value": "é"} ]] }
        ]
    }"#;

    let err = Grammar::<u8>::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        GrammarError::InvalidTerminal { ref value, width: CharWidth::Narrow, .. } if value == "é"
    ));

    let grammar = Grammar::<char>::from_json(json).unwrap();
    assert_eq!(
        grammar.inspect().productions()[0].alternatives,
        vec![vec![Literal::Terminal('é')]]
    );
}

#[test]
fn accepts_ascii_edge_terminals_in_narrow_grammar() {
    let json = r#"{
        "start": "start",
        "rules": [
            { "lhs": "start", "alternatives": [[ {"type": "TERMINAL", "value": "\u007f"}, {"type": "TERMINAL", "value": "\u0000"} ]] }
        ]
    }"#;

    let grammar = Grammar::<u8>::from_json(json).unwrap();
    assert_eq!(
        grammar.inspect().productions()[0].alternatives,
        vec![vec![Literal::Terminal(0x7f), Literal::Terminal(0)]]
    );
}
