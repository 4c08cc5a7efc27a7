//! Crate-wide error type.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type NnResult<T> = Result<T, NnError>;

/// Errors raised while building, training or evaluating a network.
#[derive(Debug, Error)]
pub enum NnError {
    #[error("Shape mismatch in {op}: left is {left:?}, right is {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Ragged matrix data: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid architecture: {message}")]
    InvalidArchitecture { message: String },

    #[error("Unknown activation: {name}")]
    UnknownActivation { name: String },

    #[error("Batch contains no examples")]
    EmptyBatch,

    #[error("Label at column {index} is {value}, expected 0 or 1")]
    NonBinaryLabel { index: usize, value: f64 },

    #[error("Cost became non-finite ({value}) at iteration {iteration}")]
    NonFiniteCost { iteration: usize, value: f64 },

    #[error("Layer {index} is out of range, network has computed layers 1..={last}")]
    LayerOutOfRange { index: usize, last: usize },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl NnError {
    pub(crate) fn architecture(message: impl Into<String>) -> NnError {
        NnError::InvalidArchitecture { message: message.into() }
    }
}
