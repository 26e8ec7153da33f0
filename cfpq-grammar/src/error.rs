//! Errors of grammar loading and normalization.

use thiserror::Error;

/// Represents an error when loading a grammar from text.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("parse error at line {line}: {reason}")]
pub struct LoadError {
    /// Human-readable reason for the error.
    pub reason: String,
    /// Line where the error happened.
    ///
    /// One-indexed.
    pub line: u32,
}

/// Errors of grammar construction.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum GrammarError {
    /// A rule survived normalization with a shape other than `A -> ε`, `A -> a`
    /// or `A -> B C`.
    #[error("rule `{rule}` is not of the form `A -> ε`, `A -> a` or `A -> B C`")]
    InvalidGrammarShape {
        /// The offending rule, formatted as text.
        rule: String,
    },
    /// The grammar text could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}
