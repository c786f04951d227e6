//! Error types for loopcost-core
//!
//! The analysis stages (classifier, tree builder, evaluator) are total over
//! any lowered AST and never fail; the only failure surfaces are parsing and
//! CLI I/O.

use thiserror::Error;

/// Main error type for loopcost operations
#[derive(Debug, Error)]
pub enum LoopcostError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LoopcostError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        LoopcostError::Parse(msg.into())
    }
}

/// Result type alias for loopcost operations
pub type Result<T> = std::result::Result<T, LoopcostError>;
