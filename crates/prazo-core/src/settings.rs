//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date** — the "today" against which
//! remaining-days and urgency queries are answered.  It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the evaluation date is stored behind a `Mutex` so that it
//! can be changed from any thread.  Each test that changes the evaluation
//! date should restore it when done — [`ScopedEvaluationDate`] does this
//! automatically on drop.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by the prazo-rs library.
///
/// Currently the only setting is the **evaluation date**.  When unset,
/// queries fall back to the system clock's current date.
pub struct Settings {
    /// The current evaluation date (days since the epoch: serial 1 is
    /// January 1, 1900).
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the explicitly-set evaluation date serial number, if any.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Return the evaluation date serial number, falling back to the system
    /// clock's current local date when none has been set.
    pub fn resolved_evaluation_date_serial(&self) -> i32 {
        self.evaluation_date_serial().unwrap_or_else(today_serial)
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}

/// Serial number of the system clock's current local date.
///
/// Serial 1 is January 1, 1900, matching `prazo-time`'s `Date` convention.
pub fn today_serial() -> i32 {
    let epoch = chrono::NaiveDate::from_ymd_opt(1899, 12, 31)
        .expect("1899-12-31 is a valid date");
    let today = chrono::Local::now().date_naive();
    (today - epoch).num_days() as i32
}

/// RAII guard that sets the evaluation date and restores the previous value
/// on drop.
///
/// Intended for tests and for callers that need a temporary "today":
///
/// ```
/// use prazo_core::{ScopedEvaluationDate, Settings};
///
/// {
///     let _guard = ScopedEvaluationDate::new(46_066);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(46_066));
/// }
/// // previous value restored here
/// ```
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Set the evaluation date to `serial`, remembering the previous value.
    pub fn new(serial: i32) -> Self {
        let previous = Settings::instance().evaluation_date_serial();
        Settings::instance().set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        match self.previous {
            Some(serial) => Settings::instance().set_evaluation_date_serial(serial),
            None => Settings::instance().reset_evaluation_date(),
        }
    }
}
