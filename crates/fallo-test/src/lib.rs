// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # fallo-test
//!
//! Verification helpers for failure contracts.
//!
//! A failure contract can be checked two equivalent ways:
//!
//! - **Local trap**: invoke the operation and pattern-match on the returned
//!   error within the calling scope.
//! - **Assertion helper**: hand the operation to [`check_fails_with`] (or the
//!   panicking [`assert_fails_with`] / [`assert_fails!`]), which invokes it
//!   and checks the resulting failure kind itself.
//!
//! ## Example
//!
//! ```rust
//! use fallo_core::{reject, CallArgs, ErrorKind};
//! use fallo_test::check_fails_with;
//!
//! let args = CallArgs::new().arg("a").kwarg("b", "c");
//! check_fails_with("reject", || reject(&args), ErrorKind::InvalidValue).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod check;
pub mod error;

pub use check::{assert_fails_with, check_fails_with};
pub use error::{CheckError, Result};
