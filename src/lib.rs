//! All-pairs context-free path querying.
//!
//! Finds every pair of vertices of an edge-labeled graph that is connected by a path
//! whose labels spell a word of a context-free language.
//!
//! ```
//! use cfpq::{AllPairsReachability, Cfg, LabeledGraph, MatrixReachability};
//!
//! let grammar = Cfg::load("S -> a S b | a b").unwrap();
//! let graph = LabeledGraph::from_edges([(0, 1, "a"), (1, 2, "b")]);
//! let solver = MatrixReachability::new(&grammar, &graph).unwrap();
//! assert!(solver.solve_all_pairs().contains(&(0, 2)));
//! ```

pub use cfpq_algorithms as algorithms;
pub use cfpq_bool_matrix as bool_matrix;
pub use cfpq_grammar as grammar;
pub use cfpq_graph as graph;
pub use cfpq_symbol as symbol;

pub use cfpq_algorithms::{AllPairsReachability, Error, MatrixReachability, NonterminalMatrices};
pub use cfpq_bool_matrix::BoolMatrix;
pub use cfpq_grammar::{Body, Cfg, CfgRule, GrammarError, LoadError, Production, Wcnf};
pub use cfpq_graph::{decompose, DecompositionError, GraphBooleanDecomposition, LabeledGraph};
pub use cfpq_symbol::{Nonterminal, Symbol, SymbolSource, Terminal};
