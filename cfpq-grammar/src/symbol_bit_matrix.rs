//! Relations `R(A, B)` between the nonterminals of a grammar, in the form of bit matrices.

use std::collections::BTreeSet;
use std::ops::{Deref, DerefMut};

use bit_matrix::BitMatrix;
use indexmap::IndexSet;

use crate::local_prelude::*;

/// Assigns dense indices to the nonterminals of a grammar, the start symbol first.
#[derive(Clone, Debug)]
pub struct NonterminalIndex {
    set: IndexSet<Nonterminal>,
}

/// A matrix that represents a relation `R(A, B)` between two nonterminals.
#[derive(Debug)]
pub struct SymbolBitMatrix {
    bit_matrix: BitMatrix,
}

/// A direct derivation matrix.
pub struct DirectDerivationMatrix(SymbolBitMatrix);
/// A reachability matrix.
pub struct ReachabilityMatrix(SymbolBitMatrix);
/// A unit derivation matrix.
pub struct UnitDerivationMatrix(SymbolBitMatrix);

impl NonterminalIndex {
    pub fn new(grammar: &Cfg) -> Self {
        let mut set = IndexSet::new();
        set.insert(grammar.start().clone());
        for rule in grammar.rules() {
            set.insert(rule.lhs.clone());
            set.extend(rule.rhs.iter().filter_map(Symbol::as_nonterminal).cloned());
        }
        NonterminalIndex { set }
    }

    pub fn get(&self, nonterminal: &Nonterminal) -> Option<usize> {
        self.set.get_index_of(nonterminal)
    }

    pub fn nonterminal(&self, index: usize) -> Option<&Nonterminal> {
        self.set.get_index(index)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Nonterminal)> {
        self.set.iter().enumerate()
    }
}

impl SymbolBitMatrix {
    fn new(num_syms: usize) -> Self {
        SymbolBitMatrix {
            bit_matrix: BitMatrix::new(num_syms, num_syms),
        }
    }

    fn set(&mut self, row: usize, col: usize, included: bool) {
        self.bit_matrix.set(row, col, included);
    }

    /// Creates an iterator over the indices of nonterminals which appear in the given row.
    pub fn iter_row_indices(&self, row: usize) -> impl Iterator<Item = usize> + '_ {
        let (_, num_cols) = self.bit_matrix.size();
        self.bit_matrix
            .iter_row(row)
            .take(num_cols)
            .enumerate()
            .filter_map(|(i, present)| if present { Some(i) } else { None })
    }
}

impl Deref for SymbolBitMatrix {
    type Target = BitMatrix;
    fn deref(&self) -> &Self::Target {
        &self.bit_matrix
    }
}

impl DerefMut for SymbolBitMatrix {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.bit_matrix
    }
}

impl Deref for DirectDerivationMatrix {
    type Target = SymbolBitMatrix;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for ReachabilityMatrix {
    type Target = SymbolBitMatrix;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for UnitDerivationMatrix {
    type Target = SymbolBitMatrix;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DirectDerivationMatrix {
    /// Returns the derivation matrix. A nonterminal is reachable from itself.
    pub fn reachability(mut self) -> ReachabilityMatrix {
        self.0.transitive_closure();
        self.0.reflexive_closure();
        ReachabilityMatrix(self.0)
    }
}

impl Cfg {
    /// Computes the direct derivation matrix. `R(A, B)` holds if some rule
    /// `A -> α B β` exists.
    pub fn direct_derivation_matrix(&self, index: &NonterminalIndex) -> DirectDerivationMatrix {
        let mut derivation = SymbolBitMatrix::new(index.len());

        for rule in self.rules() {
            let Some(lhs) = index.get(&rule.lhs) else {
                continue;
            };
            for nonterminal in rule.rhs.iter().filter_map(Symbol::as_nonterminal) {
                if let Some(rhs) = index.get(nonterminal) {
                    derivation.set(lhs, rhs, true);
                }
            }
        }

        DirectDerivationMatrix(derivation)
    }

    /// Computes the reflexive and transitive reachability matrix.
    pub fn reachability_matrix(&self, index: &NonterminalIndex) -> ReachabilityMatrix {
        self.direct_derivation_matrix(index).reachability()
    }

    /// Computes the unit derivation matrix, closed under reflexivity and transitivity.
    ///
    /// A unit derivation is defined with a grammar rule such as:
    /// ```ignore
    /// A -> B
    /// ```
    pub fn unit_derivation_matrix(&self, index: &NonterminalIndex) -> UnitDerivationMatrix {
        let mut unit_derivation = SymbolBitMatrix::new(index.len());

        for rule in self.rules().filter(|rule| rule.is_unit()) {
            let target = rule.rhs[0].as_nonterminal().and_then(|nt| index.get(nt));
            if let (Some(lhs), Some(rhs)) = (index.get(&rule.lhs), target) {
                unit_derivation.set(lhs, rhs, true);
            }
        }

        unit_derivation.transitive_closure();
        unit_derivation.reflexive_closure();
        UnitDerivationMatrix(unit_derivation)
    }

    /// Returns the set of nonterminals reachable from the start symbol, the start
    /// symbol included.
    pub fn reachable_symbols(&self) -> BTreeSet<Nonterminal> {
        let index = NonterminalIndex::new(self);
        let reachability = self.reachability_matrix(&index);
        // The start symbol has index 0.
        reachability
            .iter_row_indices(0)
            .filter_map(|i| index.nonterminal(i).cloned())
            .collect()
    }
}
