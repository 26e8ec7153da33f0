use thiserror::Error;

/// Errors of label matrix lookups.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum DecompositionError {
    /// No edge of the graph carries this label.
    #[error("no matrix for label `{label}`")]
    UnknownLabel {
        /// The label that was looked up.
        label: String,
    },
}
