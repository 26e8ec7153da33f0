use std::collections::BTreeMap;

use crate::local_prelude::*;

type RuleIndex = usize;

/// Maps every symbol to the rules it occurs in.
pub(crate) struct OccurenceMap {
    occurences: BTreeMap<Symbol, Occurences>,
    empty_occurences: Occurences,
}

/// Two `Vec`s of rule indices.
#[derive(Clone, Default)]
pub(crate) struct Occurences {
    lhs: Vec<RuleIndex>,
    rhs: Vec<RuleIndex>,
}

impl OccurenceMap {
    pub(crate) fn from_rules<'a>(rules: impl Iterator<Item = &'a CfgRule>) -> Self {
        let mut occurences: BTreeMap<Symbol, Occurences> = BTreeMap::new();
        for (i, rule) in rules.enumerate() {
            occurences.entry(rule.lhs.sym()).or_default().lhs.push(i);
            let mut rhs_syms = rule.rhs.to_vec();
            rhs_syms.sort();
            rhs_syms.dedup();
            for rhs_sym in rhs_syms {
                occurences.entry(rhs_sym).or_default().rhs.push(i);
            }
        }
        OccurenceMap {
            occurences,
            empty_occurences: Occurences::default(),
        }
    }

    pub(crate) fn get(&self, sym: &Symbol) -> &Occurences {
        self.occurences.get(sym).unwrap_or(&self.empty_occurences)
    }
}

impl Occurences {
    pub(crate) fn lhs(&self) -> &[RuleIndex] {
        &self.lhs[..]
    }

    pub(crate) fn rhs(&self) -> &[RuleIndex] {
        &self.rhs[..]
    }
}
