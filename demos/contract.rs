//! Demonstrates checking a failure contract both ways.
//!
//! ```bash
//! RUST_LOG=trace cargo run --example contract
//! ```

use fallo::prelude::*;

fn main() {
    // Initialize tracing for log output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = CallArgs::new().arg("a").kwarg("b", "c");

    // Local trap
    match reject(&args) {
        Err(err) => tracing::info!(kind = err.kind().name(), %err, "trapped locally"),
        Ok(_) => tracing::error!("did not observe expected failure"),
    }

    // Assertion helper (non-panicking form)
    match check_fails_with("reject", || reject(&args), ErrorKind::InvalidValue) {
        Ok(()) => tracing::info!("helper check passed"),
        Err(check) => tracing::error!(%check, "helper check failed"),
    }
}
