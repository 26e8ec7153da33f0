//! Normalization of arbitrary context-free grammars.
//!
//! The result is a grammar where every rule has the form `A -> a` or `A -> B C`.
//! The language is preserved, except for the empty word, which a grammar of this
//! shape cannot derive.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::local_prelude::*;
use crate::occurence_map::OccurenceMap;
use crate::symbol_bit_matrix::NonterminalIndex;

impl Cfg {
    /// Returns a grammar in normal form that is weakly equivalent to this one.
    ///
    /// Every rule of the result has the form `A -> a` or `A -> B C`. The start
    /// symbol is kept. If the start symbol derives no word at all, the result has
    /// no rules.
    pub fn to_normal_form(&self) -> Cfg {
        let mut sym_source = self.sym_source();
        let mut grammar = self.clone();

        grammar.remove_useless_rules();
        grammar.binarize(&mut sym_source);
        grammar.eliminate_nulling_rules();
        grammar.eliminate_unit_rules();
        grammar.remove_useless_rules();
        grammar.isolate_terminals(&mut sym_source);
        grammar.sort();
        grammar.dedup();

        debug!(
            "normalized a grammar of {} rules into {} rules",
            self.num_rules(),
            grammar.num_rules()
        );
        grammar
    }

    /// Removes rules that are unproductive or unreachable from the start symbol.
    /// The language represented by the grammar doesn't change.
    pub fn remove_useless_rules(&mut self) {
        let productive = self.productive_symbols();
        if !productive.contains(self.start()) {
            trace!("start symbol {} is unproductive", self.start());
            self.clear_rules();
            return;
        }
        self.retain(|rule| {
            productive.contains(&rule.lhs)
                && rule
                    .rhs
                    .iter()
                    .filter_map(Symbol::as_nonterminal)
                    .all(|nonterminal| productive.contains(nonterminal))
        });

        let reachable = self.reachable_symbols();
        self.retain(|rule| reachable.contains(&rule.lhs));
    }

    /// Rewrites rules longer than two symbols into chains of binary rules.
    ///
    /// Fresh nonterminals are generated with the given symbol source.
    pub fn binarize(&mut self, sym_source: &mut SymbolSource) {
        let rules = self.replace_rules(vec![]);
        for rule in rules {
            if rule.rhs.len() <= 2 {
                self.add_rule(rule);
                continue;
            }
            // Rewrite to a set of binarized rules.
            // From `LHS -> A B C … X Y Z` to:
            // ____________________
            // | LHS -> S0  Z
            // | S0  -> S1  Y
            // | S1  -> S2  X
            // | …
            // | Sn  -> A   B
            let mut rhs = rule.rhs.to_vec();
            let mut lhs = rule.lhs.clone();
            while rhs.len() > 2 {
                let Some(last) = rhs.pop() else {
                    break;
                };
                let chain = sym_source.gensym();
                trace!("binarize {}: {} -> {} {}", rule, lhs, chain, last);
                self.add_rule(CfgRule::new(lhs, [chain.sym(), last]));
                lhs = chain;
            }
            self.add_rule(CfgRule::new(lhs, rhs));
        }
    }

    /// Eliminates all rules of the form `A -> ε`. For every rule, adds each variant
    /// with some nullable symbols left out.
    ///
    /// The language is preserved, except for the empty word.
    pub fn eliminate_nulling_rules(&mut self) {
        let nullable = self.nullable_symbols();
        if nullable.is_empty() {
            return;
        }
        let is_nullable = |sym: &Symbol| {
            sym.as_nonterminal()
                .map_or(false, |nonterminal| nullable.contains(nonterminal))
        };

        let rules = self.replace_rules(vec![]);
        for rule in rules {
            // Each variant either keeps or leaves out every nullable symbol.
            let mut variants: Vec<Vec<Symbol>> = vec![vec![]];
            for sym in rule.rhs.iter() {
                let kept: Vec<Vec<Symbol>> = variants
                    .iter()
                    .map(|variant| {
                        let mut variant = variant.clone();
                        variant.push(sym.clone());
                        variant
                    })
                    .collect();
                if is_nullable(sym) {
                    variants.extend(kept);
                } else {
                    variants = kept;
                }
            }
            variants.sort();
            variants.dedup();
            for variant in variants.into_iter().filter(|variant| !variant.is_empty()) {
                self.add_rule(CfgRule::new(rule.lhs.clone(), variant));
            }
        }
    }

    /// Eliminates all rules of the form `A -> B`. For every unit derivation
    /// `A =>* B`, copies the remaining rules of `B` to `A`.
    pub fn eliminate_unit_rules(&mut self) {
        if !self.rules().any(CfgRule::is_unit) {
            return;
        }
        let index = NonterminalIndex::new(self);
        let unit_derivation = self.unit_derivation_matrix(&index);
        let occurence_map = OccurenceMap::from_rules(self.rules());

        let rules = self.replace_rules(vec![]);
        let mut result = BTreeSet::new();
        for (row, lhs) in index.iter() {
            for derived in unit_derivation
                .iter_row_indices(row)
                .filter_map(|col| index.nonterminal(col))
            {
                let derived_rules = occurence_map.get(&derived.sym()).lhs();
                for rule in derived_rules.iter().map(|&rule_id| &rules[rule_id]) {
                    if !rule.is_unit() {
                        result.insert(CfgRule::new(lhs.clone(), &rule.rhs[..]));
                    }
                }
            }
        }
        self.extend(result);
    }

    /// Replaces terminals in rules of two or more symbols with fresh nonterminals,
    /// adding a rule `X -> a` for every replaced terminal `a`.
    pub fn isolate_terminals(&mut self, sym_source: &mut SymbolSource) {
        let mut isolated: BTreeMap<Terminal, Nonterminal> = BTreeMap::new();
        let rules = self.replace_rules(vec![]);
        for rule in rules {
            if rule.rhs.len() < 2 || rule.rhs.iter().all(Symbol::is_nonterminal) {
                self.add_rule(rule);
                continue;
            }
            let rhs: Vec<Symbol> = rule
                .rhs
                .iter()
                .map(|sym| match sym {
                    Symbol::Terminal(terminal) => isolated
                        .entry(terminal.clone())
                        .or_insert_with(|| sym_source.fresh(&format!("T_{}", terminal)))
                        .sym(),
                    Symbol::Nonterminal(_) => sym.clone(),
                })
                .collect();
            self.add_rule(CfgRule::new(rule.lhs, rhs));
        }
        for (terminal, nonterminal) in isolated {
            trace!("isolate terminal {} behind {}", terminal, nonterminal);
            self.add_rule(CfgRule::new(nonterminal, [Symbol::Terminal(terminal)]));
        }
    }
}
