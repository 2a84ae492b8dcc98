//! # prazo
//!
//! Business-day deadline arithmetic for Brazilian labor-law practice.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `prazo-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use prazo::time::{Calendar, CourtCalendar, Date, Holiday};
//!
//! let holidays = vec![Holiday::national(
//!     "natal",
//!     "Natal",
//!     "2020-12-25".parse().unwrap(),
//!     true,
//! )];
//! let cal = CourtCalendar::for_court("TRT 5ª Região", holidays, "TRT5");
//!
//! let filed: Date = "2026-02-16".parse().unwrap();
//! let due = cal.add_business_days(filed, 15);
//! assert_eq!(due.to_string(), "2026-03-09");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and process-wide settings.
pub use prazo_core as core;

/// Date, holiday calendar, and deadline types.
pub use prazo_time as time;
