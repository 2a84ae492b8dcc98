//! `Date` — a calendar date represented as a serial number of days.
//!
//! Serial 1 is January 1, 1900; the valid range is 1900-01-01 to
//! 2199-12-31.  Dates carry no time-of-day or timezone component, which is
//! exactly the normalisation deadline arithmetic needs: two dates are the
//! same day iff they are equal.
//!
//! Dates print and parse as ISO-8601 (`YYYY-MM-DD`), the format the
//! holiday registry stores.

use crate::weekday::Weekday;
use prazo_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Minimum valid date: January 1, 1900 (serial 1).
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial` is not positive or exceeds [`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from an (unchecked) serial number.
    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!(
            serial > 0 && Date(serial) <= Self::MAX,
            "invalid date serial {serial}"
        );
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the `(month, day)` pair, ignoring the year.
    ///
    /// Recurring holidays match on this pair alone.
    pub fn month_day(&self) -> (u8, u8) {
        let (_, m, d) = ymd_from_serial(self.0);
        (m, d)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (January 1, 1900) is a Monday.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 date (`YYYY-MM-DD`, zero-padded).
    fn from_str(s: &str) -> Result<Self> {
        let parse_err = |reason: &str| Error::DateParse {
            input: s.to_string(),
            reason: reason.to_string(),
        };
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 3 || parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
            return Err(parse_err("expected YYYY-MM-DD"));
        }
        let year: u16 = parts[0]
            .parse()
            .map_err(|_| parse_err("year is not a number"))?;
        let month: u8 = parts[1]
            .parse()
            .map_err(|_| parse_err("month is not a number"))?;
        let day: u8 = parts[2]
            .parse()
            .map_err(|_| parse_err("day is not a number"))?;
        Date::from_ymd(year, month, day).map_err(|e| Error::DateParse {
            input: s.to_string(),
            reason: e.to_string(),
        })
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number (serial 1 = 1900-01-01).
fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1900, year)
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    // Days in months 1..m for the current year
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    // Days in the current month
    serial += d;
    serial
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // Estimate year, then adjust until serial falls within it
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        let start_of_year = serial_from_ymd(y, 1, 1);
        if serial < start_of_year {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let start_of_year = serial_from_ymd(y, 1, 1);
    let doy = serial - start_of_year + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        let d = Date::from_ymd(1900, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
    }

    #[test]
    fn ymd_round_trip() {
        let dates = [
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2026, 8, 29),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn weekday() {
        // 2026-02-16 is a Monday
        let d = Date::from_ymd(2026, 2, 16).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2026-02-21 is a Saturday
        let d2 = Date::from_ymd(2026, 2, 21).unwrap();
        assert_eq!(d2.weekday(), Weekday::Saturday);
    }

    #[test]
    fn month_day_ignores_year() {
        let a = Date::from_ymd(2020, 12, 25).unwrap();
        let b = Date::from_ymd(2026, 12, 25).unwrap();
        assert_eq!(a.month_day(), b.month_day());
        assert_ne!(a, b);
    }

    #[test]
    fn arithmetic() {
        let d = Date::from_ymd(2026, 1, 1).unwrap();
        let d2 = d + 31;
        assert_eq!(d2.month(), 2);
        assert_eq!(d2.day_of_month(), 1);
        assert_eq!(d.days_between(d2), 31);
        assert_eq!(d2 - d, 31);
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(Date::from_ymd(1899, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 1, 1).is_err());
        assert!(Date::from_ymd(2026, 2, 29).is_err()); // 2026 is not a leap year
        assert!(Date::from_serial(0).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn iso_display() {
        let d = Date::from_ymd(2026, 3, 5).unwrap();
        assert_eq!(d.to_string(), "2026-03-05");
        assert_eq!(format!("{d:?}"), "Date(2026-03-05)");
    }

    #[test]
    fn iso_parse() {
        let d: Date = "2026-03-05".parse().unwrap();
        assert_eq!(d, Date::from_ymd(2026, 3, 5).unwrap());

        assert!("2026-3-5".parse::<Date>().is_err());
        assert!("2026/03/05".parse::<Date>().is_err());
        assert!("not-a-date".parse::<Date>().is_err());
        assert!("2026-02-30".parse::<Date>().is_err());
    }
}
