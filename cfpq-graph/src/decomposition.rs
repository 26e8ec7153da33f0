//! Boolean decomposition of a labeled graph.

use std::collections::BTreeMap;
use std::hash::Hash;

use cfpq_bool_matrix::BoolMatrix;
use indexmap::IndexSet;
use log::{debug, trace};

use crate::error::DecompositionError;
use crate::labeled_graph::LabeledGraph;

/// One square adjacency matrix per edge label.
///
/// All matrices share a single dimension, which never shrinks.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GraphBooleanDecomposition {
    matrices: BTreeMap<String, BoolMatrix>,
    matrices_size: usize,
}

impl GraphBooleanDecomposition {
    /// Creates a decomposition of dimension `n`, with no labels.
    pub fn new(n: usize) -> Self {
        GraphBooleanDecomposition {
            matrices: BTreeMap::new(),
            matrices_size: n,
        }
    }

    /// Returns the dimension shared by all matrices.
    pub fn matrices_size(&self) -> usize {
        self.matrices_size
    }

    /// Grows every matrix to dimension `n`, keeping their entries. Does nothing
    /// if `n` is not larger than the current dimension.
    pub fn grow(&mut self, n: usize) {
        if n <= self.matrices_size {
            return;
        }
        trace!(
            "grow {} label matrices from {} to {}",
            self.matrices.len(),
            self.matrices_size,
            n
        );
        for matrix in self.matrices.values_mut() {
            matrix.resize(n, n);
        }
        self.matrices_size = n;
    }

    /// Sets the entry `(u, v)` in the matrix of `label`. The matrix is created if
    /// the label is new, and the dimension grows to fit both vertices.
    pub fn add_edge(&mut self, u: usize, v: usize, label: &str) {
        self.grow(u.max(v) + 1);
        let n = self.matrices_size;
        self.matrices
            .entry(label.to_string())
            .or_insert_with(|| BoolMatrix::square(n))
            .set(u, v, true);
    }

    /// Returns the matrix of `label`, if any edge carries it.
    pub fn matrix(&self, label: &str) -> Option<&BoolMatrix> {
        self.matrices.get(label)
    }

    /// Returns the matrix of `label`.
    pub fn get(&self, label: &str) -> Result<&BoolMatrix, DecompositionError> {
        self.matrix(label).ok_or_else(|| DecompositionError::UnknownLabel {
            label: label.to_string(),
        })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.matrices.contains_key(label)
    }

    /// Iterates over the labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.matrices.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BoolMatrix)> {
        self.matrices
            .iter()
            .map(|(label, matrix)| (label.as_str(), matrix))
    }

    pub fn num_labels(&self) -> usize {
        self.matrices.len()
    }
}

/// Decomposes a graph into label matrices.
///
/// Vertices are indexed in the order the graph yields them. Returns the
/// decomposition along with the identity of every index.
pub fn decompose<V>(graph: &LabeledGraph<V>) -> (GraphBooleanDecomposition, Vec<V>)
where
    V: Clone + Eq + Hash,
{
    let index: IndexSet<&V> = graph.vertices().collect();
    let mut decomposition = GraphBooleanDecomposition::new(index.len());
    for edge in graph.edges() {
        let source = index.get_index_of(&edge.source);
        let target = index.get_index_of(&edge.target);
        let (Some(u), Some(v)) = (source, target) else {
            continue;
        };
        decomposition.add_edge(u, v, &edge.label);
    }
    debug!(
        "decomposed a graph of {} vertices and {} edges into {} label matrices",
        index.len(),
        graph.number_of_edges(),
        decomposition.num_labels()
    );
    let vertices = index.into_iter().cloned().collect();
    (decomposition, vertices)
}
