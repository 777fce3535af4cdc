//! Error types for fallo-core.
//!
//! All errors are explicit; operations signal failure by returning an error
//! value, never by panicking.

use crate::args::CallArgs;

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, OpError>;

/// Error type for fallible operations.
///
/// The kind of a failure is separate from its message content: callers
/// dispatch on [`ErrorKind`] and treat the message as diagnostic text.
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    /// The supplied arguments were rejected.
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

impl OpError {
    /// Creates an invalid-value error whose message renders the arguments.
    #[must_use]
    pub fn invalid_value(args: &CallArgs) -> Self {
        Self::InvalidValue(args.to_string())
    }

    /// Returns the kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidValue(_) => ErrorKind::InvalidValue,
        }
    }
}

/// The kind of a failure, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Arguments were rejected as invalid.
    InvalidValue,
}

impl ErrorKind {
    /// Returns the kind name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::InvalidValue => "invalid value",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let args = CallArgs::new().arg("a").kwarg("b", "c");
        let err = OpError::invalid_value(&args);
        assert_eq!(err.to_string(), r#"Invalid value: ("a"){b: "c"}"#);
    }

    #[test]
    fn test_kind_is_invalid_value() {
        let err = OpError::invalid_value(&CallArgs::new());
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(ErrorKind::InvalidValue.name(), "invalid value");
    }

    #[test]
    fn test_message_varies_with_args_only() {
        let a = OpError::invalid_value(&CallArgs::new().arg("a"));
        let b = OpError::invalid_value(&CallArgs::new().arg("b"));
        assert_eq!(a.kind(), b.kind());
        assert_ne!(a.to_string(), b.to_string());
    }
}
