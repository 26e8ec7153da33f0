use cfpq_grammar::GrammarError;
use cfpq_graph::DecompositionError;
use thiserror::Error;

/// Errors of reachability solvers.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),
    #[error(transparent)]
    Decomposition(#[from] DecompositionError),
}
