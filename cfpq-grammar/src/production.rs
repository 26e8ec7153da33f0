//! Productions of a grammar in weak Chomsky normal form.

use std::fmt;

use crate::error::GrammarError;
use crate::local_prelude::*;

/// The body of a production in weak Chomsky normal form.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum Body {
    /// `A -> ε`
    Epsilon,
    /// `A -> a`
    Terminal(Terminal),
    /// `A -> B C`
    Binary(Nonterminal, Nonterminal),
}

/// A production `head -> body`, where the body has one of the three allowed shapes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct Production {
    pub head: Nonterminal,
    pub body: Body,
}

impl Production {
    pub fn epsilon(head: Nonterminal) -> Self {
        Production {
            head,
            body: Body::Epsilon,
        }
    }

    pub fn unary(head: Nonterminal, terminal: Terminal) -> Self {
        Production {
            head,
            body: Body::Terminal(terminal),
        }
    }

    pub fn binary(head: Nonterminal, left: Nonterminal, right: Nonterminal) -> Self {
        Production {
            head,
            body: Body::Binary(left, right),
        }
    }

    /// Returns the body symbols, in order.
    pub fn body_symbols(&self) -> Vec<Symbol> {
        match &self.body {
            Body::Epsilon => vec![],
            Body::Terminal(terminal) => vec![terminal.sym()],
            Body::Binary(left, right) => vec![left.sym(), right.sym()],
        }
    }

    /// Returns the textual key that orders productions.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl TryFrom<&CfgRule> for Production {
    type Error = GrammarError;

    fn try_from(rule: &CfgRule) -> Result<Self, Self::Error> {
        let head = rule.lhs.clone();
        match &rule.rhs[..] {
            [] => Ok(Production::epsilon(head)),
            [Symbol::Terminal(terminal)] => Ok(Production::unary(head, terminal.clone())),
            [Symbol::Nonterminal(left), Symbol::Nonterminal(right)] => {
                Ok(Production::binary(head, left.clone(), right.clone()))
            }
            _ => Err(GrammarError::InvalidGrammarShape {
                rule: rule.to_string(),
            }),
        }
    }
}

impl From<&Production> for CfgRule {
    fn from(production: &Production) -> Self {
        CfgRule::new(production.head.clone(), production.body_symbols())
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&CfgRule::from(self), f)
    }
}
