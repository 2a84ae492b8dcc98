//! # prazo-time
//!
//! Date, holiday-calendar, and deadline types: the business-day engine
//! behind legal filing-deadline computation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Remaining-days queries and urgency classification.
pub mod alert;

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait and built-in implementations.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Named procedural deadline types and the static catalog.
pub mod deadline;

/// Holiday records and scope matching.
pub mod holiday;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use alert::{
    alert_level, alert_level_as_of, remaining_business_days, remaining_business_days_as_of,
    remaining_calendar_days, remaining_calendar_days_as_of, AlertLevel,
};
pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, CourtCalendar, WeekendsOnly};
pub use date::Date;
pub use deadline::{lookup, DeadlineType, DeadlineUnit, CATALOG};
pub use holiday::{Holiday, HolidayScope};
pub use weekday::Weekday;
