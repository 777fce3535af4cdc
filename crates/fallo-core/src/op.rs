//! The always-failing operation.

use std::convert::Infallible;

use crate::args::CallArgs;
use crate::error::{OpError, Result};

/// Rejects every invocation with [`OpError::InvalidValue`].
///
/// The `Infallible` success type records in the signature that this
/// operation has no success path; the only observable effect is the
/// returned error (plus a trace event).
///
/// # Errors
/// Always returns [`OpError::InvalidValue`] with a message rendering `args`.
pub fn reject(args: &CallArgs) -> Result<Infallible> {
    let err = OpError::invalid_value(args);
    tracing::debug!(kind = err.kind().name(), %args, "rejecting call");
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_reject_never_returns_normally() {
        let result = reject(&CallArgs::new().arg("a").kwarg("b", "c"));
        assert!(result.is_err());
    }

    #[test]
    fn test_reject_kind_and_message() {
        let args = CallArgs::new().arg("a").kwarg("b", "c");
        let err = reject(&args).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(err.to_string().contains(r#"("a")"#));
        assert!(err.to_string().contains(r#"{b: "c"}"#));
    }

    #[test]
    fn test_reject_with_no_args() {
        let err = reject(&CallArgs::new()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value: (){}");
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// reject fails with the invalid-value kind for any arguments
            #[test]
            fn reject_always_fails(
                positional in proptest::collection::vec("[a-z]{0,8}", 0..4),
                named in proptest::collection::btree_map("[a-z]{1,4}", "[a-z]{0,8}", 0..4),
            ) {
                let mut args = CallArgs::new();
                for value in positional {
                    args = args.arg(value);
                }
                for (name, value) in named {
                    args = args.kwarg(name, value);
                }

                let err = reject(&args).unwrap_err();
                prop_assert_eq!(err.kind(), ErrorKind::InvalidValue);
            }

            /// the message is the fixed template applied to the rendering
            #[test]
            fn reject_message_matches_rendering(
                positional in proptest::collection::vec("[a-z]{0,8}", 0..4),
            ) {
                let mut args = CallArgs::new();
                for value in positional {
                    args = args.arg(value);
                }

                let err = reject(&args).unwrap_err();
                prop_assert_eq!(err.to_string(), format!("Invalid value: {args}"));
            }
        }
    }
}
