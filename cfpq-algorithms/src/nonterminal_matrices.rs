//! The table of one Boolean matrix per nonterminal.

use std::collections::BTreeMap;

use cfpq_bool_matrix::BoolMatrix;
use cfpq_grammar::Nonterminal;

/// Maps every nonterminal of a grammar to a square matrix. The entry `(i, j)` of
/// the matrix of `A` is set if some path from vertex `i` to vertex `j` spells a
/// word derived from `A`.
///
/// The set of nonterminals is fixed on creation.
#[derive(Clone, Debug)]
pub struct NonterminalMatrices {
    positions: BTreeMap<Nonterminal, usize>,
    matrices: Vec<BoolMatrix>,
    dimension: usize,
    stats: ClosureStats,
}

/// What happened while the closure was computed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClosureStats {
    /// Number of passes over the binary productions, including the last one,
    /// which changed nothing.
    pub passes: usize,
    /// Count of set entries of every matrix, in table order, before the first pass
    /// and after each pass.
    pub nnz_per_pass: Vec<Vec<usize>>,
}

impl NonterminalMatrices {
    /// Creates an all-false `n`x`n` matrix for every nonterminal.
    pub fn new<'a>(nonterminals: impl IntoIterator<Item = &'a Nonterminal>, n: usize) -> Self {
        let mut positions = BTreeMap::new();
        for nonterminal in nonterminals {
            let next = positions.len();
            positions.entry(nonterminal.clone()).or_insert(next);
        }
        NonterminalMatrices {
            matrices: vec![BoolMatrix::square(n); positions.len()],
            positions,
            dimension: n,
            stats: ClosureStats::default(),
        }
    }

    /// Returns the matrix of the nonterminal, or `None` for a nonterminal
    /// outside of the table.
    pub fn get(&self, nonterminal: &Nonterminal) -> Option<&BoolMatrix> {
        self.position(nonterminal).map(|pos| &self.matrices[pos])
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Iterates over nonterminals with their matrices, in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&Nonterminal, &BoolMatrix)> {
        let mut entries: Vec<_> = self.positions.iter().collect();
        entries.sort_by_key(|&(_, &pos)| pos);
        entries
            .into_iter()
            .map(move |(nonterminal, &pos)| (nonterminal, &self.matrices[pos]))
    }

    pub fn stats(&self) -> &ClosureStats {
        &self.stats
    }

    /// Returns the count of set entries of the nonterminal's matrix, before the
    /// first pass and after each pass.
    pub fn nnz_history(&self, nonterminal: &Nonterminal) -> Vec<usize> {
        let Some(pos) = self.position(nonterminal) else {
            return vec![];
        };
        self.stats
            .nnz_per_pass
            .iter()
            .map(|counts| counts[pos])
            .collect()
    }

    pub(crate) fn position(&self, nonterminal: &Nonterminal) -> Option<usize> {
        self.positions.get(nonterminal).copied()
    }

    pub(crate) fn matrix_mut(&mut self, pos: usize) -> &mut BoolMatrix {
        &mut self.matrices[pos]
    }

    /// Accumulates `T[head] |= T[left] · T[right]`. Returns the new count of set
    /// entries of `T[head]`.
    pub(crate) fn accumulate_product(&mut self, head: usize, left: usize, right: usize) -> usize {
        let product = self.matrices[left].mxm(&self.matrices[right]);
        let target = &mut self.matrices[head];
        target.union_with(&product);
        target.nnz()
    }

    pub(crate) fn record_pass(&mut self) {
        let counts = self.matrices.iter().map(BoolMatrix::nnz).collect();
        self.stats.nnz_per_pass.push(counts);
    }

    pub(crate) fn set_passes(&mut self, passes: usize) {
        self.stats.passes = passes;
    }
}
