// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # fallo-core
//!
//! Failure-contract primitives for the fallo workspace.
//!
//! A *failure contract* states that invoking an operation with given
//! positional and named arguments fails with a specific error kind. This
//! crate provides the pieces needed to express one:
//!
//! - [`CallArgs`] for the positional sequence and named mapping
//! - [`OpError`] / [`ErrorKind`] separating a failure's kind from its message
//! - [`reject`], an operation with no success path, for exercising the
//!   verification idioms in `fallo-test`
//!
//! ## Example
//!
//! ```rust
//! use fallo_core::{reject, CallArgs, ErrorKind};
//!
//! let args = CallArgs::new().arg("a").kwarg("b", "c");
//! let err = reject(&args).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidValue);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod args;
pub mod error;
pub mod op;

pub use args::CallArgs;
pub use error::{ErrorKind, OpError, Result};
pub use op::reject;
