//! Check error types.

use fallo_core::ErrorKind;

/// Result type alias for check operations.
pub type Result<T> = std::result::Result<T, CheckError>;

/// Errors reported by failure-contract checks.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The operation returned normally instead of failing.
    #[error("did not observe expected failure: {op} returned normally")]
    UnexpectedSuccess {
        /// Name of the checked operation.
        op: String,
    },

    /// The operation failed, but with the wrong kind.
    #[error("{op} failed with kind \"{actual}\", expected \"{expected}\"")]
    WrongKind {
        /// Name of the checked operation.
        op: String,
        /// The kind the check expected.
        expected: ErrorKind,
        /// The kind the operation produced.
        actual: ErrorKind,
    },
}

impl CheckError {
    /// Creates an unexpected-success error.
    #[must_use]
    pub fn unexpected_success(op: impl Into<String>) -> Self {
        Self::UnexpectedSuccess { op: op.into() }
    }

    /// Creates a wrong-kind error.
    #[must_use]
    pub fn wrong_kind(op: impl Into<String>, expected: ErrorKind, actual: ErrorKind) -> Self {
        Self::WrongKind {
            op: op.into(),
            expected,
            actual,
        }
    }
}
