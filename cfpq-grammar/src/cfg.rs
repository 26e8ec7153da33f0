//! Definitions of the context-free grammar type and its rules.

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::local_prelude::*;
use crate::occurence_map::OccurenceMap;
use crate::rule_builder::RuleBuilder;

/// Context-free grammar type.
///
/// Holds a start symbol and a list of rules of arbitrary shape.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cfg {
    /// The start symbol.
    start: Nonterminal,
    /// The array of rules.
    rules: Vec<CfgRule>,
}

/// Standard grammar rule representation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
pub struct CfgRule {
    /// The rule's left-hand side symbol.
    pub lhs: Nonterminal,
    /// The rule's right-hand side symbols.
    pub rhs: Rc<[Symbol]>,
}

/// Used only for [`fn rhs_closure`].
///
/// [`fn rhs_closure`]: Cfg::rhs_closure
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum RhsPropertyMode {
    /// If **all** symbols on the RHS have the property,
    /// the LHS has it too.
    All,
    /// If **any** symbol on the RHS has the property,
    /// the LHS has it too.
    Any,
}

impl Default for Cfg {
    fn default() -> Self {
        Self::new(Nonterminal::new("S"))
    }
}

impl Cfg {
    /// Creates an empty context-free grammar with the given start symbol.
    pub fn new(start: impl Into<Nonterminal>) -> Self {
        Cfg {
            start: start.into(),
            rules: vec![],
        }
    }

    /// Returns nonterminals with the given names.
    pub fn nonterminals_named<const N: usize>(names: [&str; N]) -> [Nonterminal; N] {
        names.map(Nonterminal::new)
    }

    /// Returns terminals with the given labels.
    pub fn terminals_named<const N: usize>(labels: [&str; N]) -> [Terminal; N] {
        labels.map(Terminal::new)
    }

    /// Returns the start symbol.
    pub fn start(&self) -> &Nonterminal {
        &self.start
    }

    /// Assigns a new start symbol.
    pub fn set_start(&mut self, start: impl Into<Nonterminal>) {
        self.start = start.into();
    }

    /// Returns an iterator over the list of grammar rules.
    pub fn rules(&self) -> impl Iterator<Item = &CfgRule> {
        self.rules.iter()
    }

    /// Returns the number of rules.
    pub fn num_rules(&self) -> usize {
        self.rules.len()
    }

    /// Checks whether the grammar has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Starts building a new rule.
    pub fn rule(&mut self, lhs: &Nonterminal) -> RuleBuilder<'_> {
        RuleBuilder::new(self).rule(lhs)
    }

    /// Adds a rule to this grammar.
    pub fn add_rule(&mut self, rule: CfgRule) {
        self.rules.push(rule);
    }

    /// Retains only the rules specified by the predicate.
    ///
    /// In other words, removes all the rules for which `f(&rule)`
    /// returns false.
    pub fn retain(&mut self, f: impl FnMut(&CfgRule) -> bool) {
        self.rules.retain(f);
    }

    /// Empties the grammar.
    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    /// Extend the list of rules with the given rules.
    pub fn extend(&mut self, rules: impl IntoIterator<Item = CfgRule>) {
        self.rules.extend(rules);
    }

    /// Replaces the list of rules, returning the old one.
    pub(crate) fn replace_rules(&mut self, rules: Vec<CfgRule>) -> Vec<CfgRule> {
        std::mem::replace(&mut self.rules, rules)
    }

    /// Sorts the rule array.
    pub fn sort(&mut self) {
        self.rules.sort();
    }

    /// Removes consecutive duplicate rules.
    pub fn dedup(&mut self) {
        self.rules.dedup();
    }

    /// Returns the set of nonterminals, including the start symbol and the
    /// nonterminals that appear only on the RHS.
    pub fn nonterminals(&self) -> BTreeSet<Nonterminal> {
        let mut result = BTreeSet::new();
        result.insert(self.start.clone());
        for rule in self.rules() {
            result.insert(rule.lhs.clone());
            result.extend(rule.rhs.iter().filter_map(Symbol::as_nonterminal).cloned());
        }
        result
    }

    /// Returns the set of terminals that appear in the grammar.
    pub fn terminals(&self) -> BTreeSet<Terminal> {
        self.rules()
            .flat_map(|rule| rule.rhs.iter().filter_map(Symbol::as_terminal))
            .cloned()
            .collect()
    }

    /// Returns a source of fresh nonterminals that do not collide with this
    /// grammar's nonterminals.
    pub fn sym_source(&self) -> SymbolSource {
        SymbolSource::with_taken(
            self.nonterminals()
                .into_iter()
                .map(|nonterminal| nonterminal.to_text().to_string()),
        )
    }

    /// Checks whether every rule has one of the forms `A -> ε`, `A -> a`
    /// or `A -> B C`.
    pub fn is_weak_normal_form(&self) -> bool {
        self.rules().all(CfgRule::is_weak_normal_form)
    }

    /// If **all** symbols on the RHS have the property, the LHS has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    pub fn rhs_closure_for_all(&self, property: &mut BTreeSet<Symbol>) {
        self.rhs_closure(property, RhsPropertyMode::All)
    }

    /// If **any** symbols on the RHS have the property, the LHS has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    pub fn rhs_closure_for_any(&self, property: &mut BTreeSet<Symbol>) {
        self.rhs_closure(property, RhsPropertyMode::Any)
    }

    /// If **any** or **all** symbols on the RHS have the property, the LHS
    /// has it too.
    /// Updates the given symbol set according to the above, and does it
    /// transitively.
    ///
    /// Rules with an empty RHS are never visited. Seed their LHS explicitly.
    pub fn rhs_closure(&self, property: &mut BTreeSet<Symbol>, property_mode: RhsPropertyMode) {
        let mut work_stack: Vec<Symbol> = property.iter().cloned().collect();

        let occurence_map = OccurenceMap::from_rules(self.rules());

        while let Some(work_sym) = work_stack.pop() {
            for &rule_id in occurence_map.get(&work_sym).rhs() {
                let rule = &self.rules[rule_id];
                let lhs = rule.lhs.sym();
                if property.contains(&lhs) {
                    continue;
                }
                let mut rhs_iter = rule.rhs.iter();
                let rhs_satisfies_property = match property_mode {
                    RhsPropertyMode::All => rhs_iter.all(|sym| property.contains(sym)),
                    RhsPropertyMode::Any => rhs_iter.any(|sym| property.contains(sym)),
                };
                if rhs_satisfies_property {
                    property.insert(lhs.clone());
                    work_stack.push(lhs);
                }
            }
        }
    }

    /// Returns the set of nullable nonterminals, which derive the empty word.
    pub fn nullable_symbols(&self) -> BTreeSet<Nonterminal> {
        let mut nullable: BTreeSet<Symbol> = self
            .rules()
            .filter(|rule| rule.rhs.is_empty())
            .map(|rule| rule.lhs.sym())
            .collect();
        self.rhs_closure_for_all(&mut nullable);
        into_nonterminals(nullable)
    }

    /// Returns the set of productive nonterminals, which derive at least one word.
    pub fn productive_symbols(&self) -> BTreeSet<Nonterminal> {
        // Begin with marking terminal symbols and the LHS of nulling rules.
        let mut productive: BTreeSet<Symbol> =
            self.terminals().into_iter().map(Symbol::Terminal).collect();
        productive.extend(
            self.rules()
                .filter(|rule| rule.rhs.is_empty())
                .map(|rule| rule.lhs.sym()),
        );
        self.rhs_closure_for_all(&mut productive);
        into_nonterminals(productive)
    }
}

fn into_nonterminals(syms: BTreeSet<Symbol>) -> BTreeSet<Nonterminal> {
    syms.into_iter()
        .filter_map(|sym| match sym {
            Symbol::Nonterminal(nonterminal) => Some(nonterminal),
            Symbol::Terminal(_) => None,
        })
        .collect()
}

impl CfgRule {
    /// Creates a new rule.
    pub fn new(lhs: Nonterminal, rhs: impl AsRef<[Symbol]>) -> Self {
        CfgRule {
            lhs,
            rhs: rhs.as_ref().into(),
        }
    }

    /// Checks whether this rule has one of the forms `A -> ε`, `A -> a`
    /// or `A -> B C`.
    pub fn is_weak_normal_form(&self) -> bool {
        match &self.rhs[..] {
            [] => true,
            [sym] => sym.is_terminal(),
            [left, right] => left.is_nonterminal() && right.is_nonterminal(),
            _ => false,
        }
    }

    /// Checks whether this rule has the form `A -> B`.
    pub fn is_unit(&self) -> bool {
        matches!(&self.rhs[..], [sym] if sym.is_nonterminal())
    }
}

/// Formats a symbol so that the text loader reads it back as the same symbol.
fn fmt_symbol(sym: &Symbol, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match sym {
        Symbol::Nonterminal(nonterminal) => fmt_nonterminal(nonterminal, f),
        Symbol::Terminal(terminal) => {
            let text = terminal.to_text();
            if crate::load::reads_as_terminal(text) {
                f.write_str(text)
            } else {
                write!(f, "TER:{}", text)
            }
        }
    }
}

fn fmt_nonterminal(nonterminal: &Nonterminal, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let text = nonterminal.to_text();
    if crate::load::reads_as_nonterminal(text) {
        f.write_str(text)
    } else {
        write!(f, "VAR:{}", text)
    }
}

impl fmt::Display for CfgRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_nonterminal(&self.lhs, f)?;
        f.write_str(" ->")?;
        if self.rhs.is_empty() {
            return f.write_str(" $");
        }
        for sym in self.rhs.iter() {
            f.write_str(" ")?;
            fmt_symbol(sym, f)?;
        }
        Ok(())
    }
}

/// Formats the grammar with one rule per line, in the format read by
/// [`Cfg::from_text`].
impl fmt::Display for Cfg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in self.rules() {
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}
