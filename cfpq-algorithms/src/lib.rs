//! Algorithms for all-pairs context-free path querying.
//!
//! Given a grammar over edge labels and a labeled graph, find every pair of
//! vertices `(u, v)` such that the labels along some path from `u` to `v` spell a
//! word of the grammar's language.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod error;
pub mod matrix;
pub mod nonterminal_matrices;

use std::collections::HashSet;

pub use crate::error::Error;
pub use crate::matrix::MatrixReachability;
pub use crate::nonterminal_matrices::{ClosureStats, NonterminalMatrices};

/// An algorithm that answers the all-pairs reachability query.
pub trait AllPairsReachability {
    /// The vertex identity of the input graph.
    type Vertex;

    /// Returns every pair of vertices connected by a path whose labels form a word
    /// derived from the start symbol.
    fn solve_all_pairs(&self) -> &HashSet<(Self::Vertex, Self::Vertex)>;
}
