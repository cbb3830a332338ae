//! # Observability & Tracing
//!
//! Structured logging setup for everything built on the table framework.
//!
//! The framework logs with the `tracing` crate throughout: controller
//! lifecycle at `info`, request receipt and payloads at `debug`, failure
//! paths at `warn`. Rich API failure detail only ever reaches the logs;
//! the contract between dialogs and tables stays binary.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads and modal transitions
//! ```
//!
//! The compact format hides the crate/module prefix (`with_target(false)`)
//! since every line already carries the entity `kind` as a structured
//! field.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Lines carry the entity kind instead of module paths
        .compact()
        .init();
}
