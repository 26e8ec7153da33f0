//! Grammars in weak Chomsky normal form, with productions partitioned by shape.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::error::GrammarError;
use crate::local_prelude::*;
use crate::production::{Body, Production};

/// A grammar in weak Chomsky normal form.
///
/// Every production has one of the forms `A -> ε`, `A -> a` or `A -> B C`.
/// The nullable productions are taken from the original grammar as written,
/// while the other two lists come from its normal form.
#[derive(Clone, Debug)]
pub struct Wcnf {
    original: Cfg,
    start: Nonterminal,
    epsilon_productions: Vec<Production>,
    unary_productions: Vec<Production>,
    binary_productions: Vec<Production>,
    variables: Vec<Nonterminal>,
    terminals: Vec<Terminal>,
}

impl Wcnf {
    /// Builds the normal form of the given grammar.
    ///
    /// A grammar that already has the required shape is used as it is.
    pub fn new(cfg: Cfg) -> Result<Self, GrammarError> {
        let normal_form = if cfg.is_weak_normal_form() {
            cfg.clone()
        } else {
            cfg.to_normal_form()
        };

        let mut epsilon_productions = vec![];
        for rule in cfg.rules().filter(|rule| rule.rhs.is_empty()) {
            epsilon_productions.push(Production::try_from(rule)?);
        }

        let mut unary_productions = vec![];
        let mut binary_productions = vec![];
        for rule in normal_form.rules().filter(|rule| !rule.rhs.is_empty()) {
            let production = Production::try_from(rule)?;
            if matches!(production.body, Body::Terminal(_)) {
                unary_productions.push(production);
            } else {
                binary_productions.push(production);
            }
        }

        sort_productions(&mut epsilon_productions);
        sort_productions(&mut unary_productions);
        sort_productions(&mut binary_productions);

        let mut variables = BTreeSet::new();
        let mut terminals = BTreeSet::new();
        for production in epsilon_productions
            .iter()
            .chain(&unary_productions)
            .chain(&binary_productions)
        {
            variables.insert(production.head.clone());
            match &production.body {
                Body::Epsilon => {}
                Body::Terminal(terminal) => {
                    terminals.insert(terminal.clone());
                }
                Body::Binary(left, right) => {
                    variables.insert(left.clone());
                    variables.insert(right.clone());
                }
            }
        }

        debug!(
            "weak normal form of {} rules: {} nullable, {} unary, {} binary productions",
            cfg.num_rules(),
            epsilon_productions.len(),
            unary_productions.len(),
            binary_productions.len()
        );

        Ok(Wcnf {
            start: cfg.start().clone(),
            original: cfg,
            epsilon_productions,
            unary_productions,
            binary_productions,
            variables: variables.into_iter().collect(),
            terminals: terminals.into_iter().collect(),
        })
    }

    /// Loads a grammar from text and builds its normal form.
    pub fn from_text(text: &str, start: impl Into<Nonterminal>) -> Result<Self, GrammarError> {
        Self::new(Cfg::from_text(text, start)?)
    }

    pub fn start(&self) -> &Nonterminal {
        &self.start
    }

    pub fn epsilon_productions(&self) -> &[Production] {
        &self.epsilon_productions
    }

    pub fn unary_productions(&self) -> &[Production] {
        &self.unary_productions
    }

    pub fn binary_productions(&self) -> &[Production] {
        &self.binary_productions
    }

    /// Returns all productions: nullable, then unary, then binary.
    pub fn productions(&self) -> impl Iterator<Item = &Production> {
        self.epsilon_productions
            .iter()
            .chain(&self.unary_productions)
            .chain(&self.binary_productions)
    }

    /// Returns the sorted nonterminals that appear in any production.
    pub fn variables(&self) -> &[Nonterminal] {
        &self.variables
    }

    /// Returns the sorted terminals that appear in any production.
    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }

    /// Returns the grammar this normal form was built from.
    pub fn original(&self) -> &Cfg {
        &self.original
    }

    /// Checks whether the original grammar derives the word.
    pub fn contains(&self, word: &[Terminal]) -> bool {
        self.original.contains(word)
    }
}

/// Sorts by textual key and removes duplicates.
fn sort_productions(productions: &mut Vec<Production>) {
    productions.sort_by_cached_key(Production::to_text);
    productions.dedup();
}

impl fmt::Display for Wcnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for production in self.productions() {
            writeln!(f, "{}", production)?;
        }
        Ok(())
    }
}
