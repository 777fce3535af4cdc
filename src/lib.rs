//! Fallo: failure-contract modeling and verification.
//!
//! A failure contract states that an operation, given certain positional and
//! named arguments, fails with a specific error kind. `fallo-core` provides
//! the contract primitives; `fallo-test` provides the verification idioms.
//!
//! # Quick Start
//!
//! ```rust
//! use fallo::prelude::*;
//!
//! let args = CallArgs::new().arg("a").kwarg("b", "c");
//! check_fails_with("reject", || reject(&args), ErrorKind::InvalidValue).unwrap();
//! ```

pub use fallo_core as core;
pub use fallo_test as test;

/// Prelude module for common imports.
pub mod prelude {
    pub use fallo_core::{reject, CallArgs, ErrorKind, OpError};
    pub use fallo_test::{assert_fails_with, check_fails_with, CheckError};
}
