//! JSON deserialization for grammar descriptions.
//!
//! Literals use an internally-tagged `type` field, in the style of
//! tree-sitter's `grammar.json`.

use serde::Deserialize;

use crate::{CharWidth, NonterminalId, TerminalChar};

use super::builder::GrammarBuilder;
use super::types::{Alternative, Grammar, Literal};

/// Error during grammar construction.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown character class `{0}`")]
    UnknownCharClass(String),

    #[error("rule `{0}` has no alternatives")]
    NoAlternatives(String),

    #[error("rule `{rule}` references undeclared nonterminal id {id}")]
    UndeclaredNonterminal { rule: String, id: NonterminalId },

    #[error("terminal {value:?} in rule `{rule}` is not a single {width} character")]
    InvalidTerminal {
        rule: String,
        value: String,
        width: CharWidth,
    },
}

impl<C: TerminalChar> Grammar<C> {
    /// Parse grammar from JSON string.
    ///
    /// Ids are assigned as if the description were replayed through
    /// [`GrammarBuilder`]: start symbol first, then character classes in
    /// listed order, then first mention within the rules.
    pub fn from_json(json: &str) -> Result<Self, GrammarError> {
        let raw: RawGrammar = serde_json::from_str(json)?;
        raw.into_grammar()
    }
}

/// Raw grammar structure matching the JSON format.
#[derive(Debug, Deserialize)]
struct RawGrammar {
    start: String,
    #[serde(default)]
    char_classes: Vec<String>,
    #[serde(default)]
    rules: Vec<RawRule>,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    lhs: String,
    alternatives: Vec<Vec<RawLiteral>>,
}

/// Raw literal matching the JSON format.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
#[allow(clippy::upper_case_acronyms)]
enum RawLiteral {
    NONTERMINAL { name: String },
    TERMINAL { value: String },
    NULL,
}

impl RawGrammar {
    fn into_grammar<C: TerminalChar>(self) -> Result<Grammar<C>, GrammarError> {
        let mut builder = GrammarBuilder::new(&self.start);
        for class in &self.char_classes {
            builder.char_class(class)?;
        }

        for rule in self.rules {
            // lhs is declared before anything it mentions
            builder.nt(&rule.lhs);
            let alternatives = rule
                .alternatives
                .into_iter()
                .map(|alt| {
                    alt.into_iter()
                        .map(|lit| lit.into_literal(&rule.lhs, &mut builder))
                        .collect::<Result<Alternative<C>, _>>()
                })
                .collect::<Result<Vec<_>, _>>()?;
            builder.rule(&rule.lhs, alternatives)?;
        }

        Ok(builder.build())
    }
}

impl RawLiteral {
    fn into_literal<C: TerminalChar>(
        self,
        rule: &str,
        builder: &mut GrammarBuilder<C>,
    ) -> Result<Literal<C>, GrammarError> {
        match self {
            RawLiteral::NONTERMINAL { name } => Ok(Literal::Nonterminal(builder.nt(&name))),
            RawLiteral::TERMINAL { value } => single_char(&value)
                .and_then(C::from_char)
                .map(Literal::Terminal)
                .ok_or_else(|| GrammarError::InvalidTerminal {
                    rule: rule.to_owned(),
                    value,
                    width: C::WIDTH,
                }),
            RawLiteral::NULL => Ok(Literal::Epsilon),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let ch = chars.next()?;
    chars.next().is_none().then_some(ch)
}
