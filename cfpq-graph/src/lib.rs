//! Directed edge-labeled graphs, and their decomposition into one Boolean
//! adjacency matrix per label.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]

pub mod decomposition;
pub mod error;
pub mod labeled_graph;

pub use crate::decomposition::{decompose, GraphBooleanDecomposition};
pub use crate::error::DecompositionError;
pub use crate::labeled_graph::{LabeledEdge, LabeledGraph};
pub use cfpq_bool_matrix::BoolMatrix;
