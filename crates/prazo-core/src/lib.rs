//! # prazo-core
//!
//! Foundational types shared across the prazo-rs workspace: the error
//! enum, the `Result` alias, and the process-wide `Settings` singleton
//! that holds the evaluation date ("today" for remaining-days queries).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
