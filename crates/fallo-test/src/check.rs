//! Failure-contract checks.
//!
//! [`check_fails_with`] is the non-panicking form: it reports the outcome as
//! a [`Result`] so callers can compose or log it. [`assert_fails_with`] and
//! [`assert_fails!`] are the in-test forms that fail the surrounding test
//! directly.

use fallo_core::{ErrorKind, OpError};

use crate::error::{CheckError, Result};

/// Invokes `op` and checks that it fails with the `expected` kind.
///
/// `name` identifies the operation in check failure messages.
///
/// # Errors
/// Returns [`CheckError::UnexpectedSuccess`] if `op` returns normally, or
/// [`CheckError::WrongKind`] if it fails with a different kind.
pub fn check_fails_with<T, F>(name: &str, op: F, expected: ErrorKind) -> Result<()>
where
    F: FnOnce() -> std::result::Result<T, OpError>,
{
    match op() {
        Ok(_) => Err(CheckError::unexpected_success(name)),
        Err(err) if err.kind() == expected => {
            tracing::trace!(op = name, kind = expected.name(), "observed expected failure");
            Ok(())
        }
        Err(err) => Err(CheckError::wrong_kind(name, expected, err.kind())),
    }
}

/// Like [`check_fails_with`], but panics on a failed check.
///
/// # Panics
/// Panics with the check's error message if `op` returns normally or fails
/// with a different kind.
#[allow(clippy::panic)] // assertion helpers fail the surrounding test by panicking
pub fn assert_fails_with<T, F>(name: &str, op: F, expected: ErrorKind)
where
    F: FnOnce() -> std::result::Result<T, OpError>,
{
    if let Err(check) = check_fails_with(name, op, expected) {
        panic!("{check}");
    }
}

/// Asserts that invoking an operation with the given arguments fails with
/// the expected kind.
///
/// ```rust
/// use fallo_core::{reject, CallArgs, ErrorKind};
/// use fallo_test::assert_fails;
///
/// let args = CallArgs::new().arg("a").kwarg("b", "c");
/// assert_fails!(reject, &args, ErrorKind::InvalidValue);
/// ```
#[macro_export]
macro_rules! assert_fails {
    ($op:path, $args:expr, $kind:expr) => {
        $crate::assert_fails_with(stringify!($op), || $op($args), $kind)
    };
}
