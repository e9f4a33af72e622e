//! Error types for sqlgen.

use thiserror::Error;

/// The error type for SQL emission.
///
/// Emission is total over the built-in node kinds; the only runtime
/// failure is an extension node whose tag nobody registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No renderer is registered for the given extension tag.
    #[error("No emitter for node: :{0}")]
    UnknownNode(String),
}

impl Error {
    /// Create an unknown-node error for the given tag.
    pub fn unknown(tag: impl Into<String>) -> Self {
        Self::UnknownNode(tag.into())
    }
}

/// Result type alias for emission operations.
pub type Result<T> = std::result::Result<T, Error>;
