//! `Calendar` trait and concrete calendar implementations.
//!
//! A calendar knows which dates are business days: weekends are never
//! business days, and each implementation decides which further dates are
//! designated holidays.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::holiday::Holiday;
use crate::weekday::Weekday;

/// A court calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"TRT 5ª Região"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a designated holiday.
    ///
    /// Weekends are handled separately by [`is_weekend`](Calendar::is_weekend);
    /// a Saturday with no holiday record is not a holiday, merely a
    /// non-business day.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a weekend.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if `date` is a business day: neither a weekend nor a
    /// designated holiday.
    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Advance `date` by `n` business days.
    ///
    /// The walk moves one calendar day at a time and counts only landed-on
    /// business days, so the start date itself is never counted; `n == 0`
    /// returns `date` unchanged and for `n > 0` the result is strictly
    /// after `date` and is itself a business day.
    fn add_business_days(&self, mut date: Date, n: u32) -> Date {
        let mut remaining = n;
        while remaining > 0 {
            date = date + 1;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        date
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start + 1;
        while d <= end {
            if self.is_business_day(d) {
                count += 1;
            }
            d = d + 1;
        }
        sign * count
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, mut date: Date, convention: BusinessDayConvention) -> Date {
        match convention {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => {
                while !self.is_business_day(date) {
                    date = date + 1;
                }
                date
            }
            BusinessDayConvention::Preceding => {
                while !self.is_business_day(date) {
                    date = date - 1;
                }
                date
            }
        }
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

/// A calendar backed by a holiday registry, optionally scoped to one court.
///
/// The registry list is taken by value at construction and never mutated;
/// recomputing against a fresh registry means building a new calendar.
#[derive(Debug, Clone)]
pub struct CourtCalendar {
    name: String,
    holidays: Vec<Holiday>,
    court: Option<String>,
}

impl CourtCalendar {
    /// Create a calendar over `holidays` with no court scope.
    ///
    /// Note that with no court scope, court-bound holiday records still
    /// match (see [`Holiday::applies_to`]).
    pub fn new(name: impl Into<String>, holidays: Vec<Holiday>) -> Self {
        Self {
            name: name.into(),
            holidays,
            court: None,
        }
    }

    /// Create a calendar over `holidays` scoped to the given court.
    pub fn for_court(
        name: impl Into<String>,
        holidays: Vec<Holiday>,
        court: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            holidays,
            court: Some(court.into()),
        }
    }

    /// The court this calendar is scoped to, if any.
    pub fn court(&self) -> Option<&str> {
        self.court.as_deref()
    }

    /// The holiday records backing this calendar.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }
}

impl Calendar for CourtCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.holidays
            .iter()
            .any(|h| h.applies_to(date, self.court.as_deref()))
    }
}
