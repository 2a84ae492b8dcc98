//! Remaining-days queries and deadline urgency classification.
//!
//! The `*_as_of` functions are pure: they take "today" explicitly.  The
//! ambient variants resolve "today" from [`Settings`] (the evaluation date
//! if one is set, otherwise the system clock), which is what application
//! code calls.

use crate::calendar::Calendar;
use crate::date::Date;
use prazo_core::Settings;

/// Urgency of a deadline relative to today, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AlertLevel {
    /// The due date has passed.
    Overdue,
    /// The deadline expires today.
    DueToday,
    /// Three or fewer business days remain.
    WithinThreeDays,
    /// Seven or fewer business days remain.
    WithinSevenDays,
    /// Fifteen or fewer business days remain.
    WithinFifteenDays,
    /// More than fifteen business days remain.
    OnTrack,
}

/// Business days remaining until `due`, as seen from `today`.
///
/// Zero when `due` is today or earlier; otherwise the number of business
/// days after `today` up to and including `due`.
pub fn remaining_business_days_as_of(today: Date, due: Date, calendar: &dyn Calendar) -> u32 {
    if due <= today {
        return 0;
    }
    calendar.business_days_between(today, due) as u32
}

/// Calendar days remaining until `due`, as seen from `today`; zero when
/// `due` is today or earlier.
pub fn remaining_calendar_days_as_of(today: Date, due: Date) -> u32 {
    if due <= today {
        return 0;
    }
    today.days_between(due) as u32
}

/// Classify the urgency of `due` as seen from `today`.
///
/// Both remaining counts clamp to zero for past dates, so a same-day
/// deadline and a missed one look alike through them; the direct date
/// comparison in the zero/zero branch tells the two apart.
pub fn alert_level_as_of(today: Date, due: Date, calendar: &dyn Calendar) -> AlertLevel {
    let remaining = remaining_business_days_as_of(today, due, calendar);
    let calendar_days = remaining_calendar_days_as_of(today, due);

    if calendar_days == 0 && remaining == 0 {
        if due < today {
            AlertLevel::Overdue
        } else {
            AlertLevel::DueToday
        }
    } else if remaining == 0 {
        AlertLevel::Overdue
    } else if remaining <= 3 {
        AlertLevel::WithinThreeDays
    } else if remaining <= 7 {
        AlertLevel::WithinSevenDays
    } else if remaining <= 15 {
        AlertLevel::WithinFifteenDays
    } else {
        AlertLevel::OnTrack
    }
}

/// Today per [`Settings`]: the evaluation date if set, else the system
/// clock's current date.
fn evaluation_date() -> Date {
    Date::from_serial_unchecked(Settings::instance().resolved_evaluation_date_serial())
}

/// Business days remaining until `due` from today (per [`Settings`]).
pub fn remaining_business_days(due: Date, calendar: &dyn Calendar) -> u32 {
    remaining_business_days_as_of(evaluation_date(), due, calendar)
}

/// Calendar days remaining until `due` from today (per [`Settings`]).
pub fn remaining_calendar_days(due: Date) -> u32 {
    remaining_calendar_days_as_of(evaluation_date(), due)
}

/// Classify the urgency of `due` from today (per [`Settings`]).
pub fn alert_level(due: Date, calendar: &dyn Calendar) -> AlertLevel {
    alert_level_as_of(evaluation_date(), due, calendar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{CourtCalendar, WeekendsOnly};
    use crate::holiday::Holiday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    // Monday, the reference "today" used throughout.
    fn monday() -> Date {
        date(2026, 2, 16)
    }

    #[test]
    fn remaining_counts_clamp_to_zero() {
        let cal = WeekendsOnly;
        assert_eq!(remaining_business_days_as_of(monday(), monday(), &cal), 0);
        assert_eq!(remaining_business_days_as_of(monday(), date(2026, 2, 10), &cal), 0);
        assert_eq!(remaining_calendar_days_as_of(monday(), date(2026, 2, 10)), 0);
    }

    #[test]
    fn remaining_business_days_counts_due_date() {
        let cal = WeekendsOnly;
        // Tue, Wed, Thu
        assert_eq!(remaining_business_days_as_of(monday(), date(2026, 2, 19), &cal), 3);
        // Crossing a weekend: Tue..Fri + Mon = 5
        assert_eq!(remaining_business_days_as_of(monday(), date(2026, 2, 23), &cal), 5);
    }

    #[test]
    fn remaining_calendar_days_is_plain_difference() {
        assert_eq!(remaining_calendar_days_as_of(monday(), date(2026, 2, 19)), 3);
        assert_eq!(remaining_calendar_days_as_of(monday(), date(2026, 2, 23)), 7);
    }

    #[test]
    fn same_day_due_is_due_today_not_overdue() {
        let cal = WeekendsOnly;
        assert_eq!(alert_level_as_of(monday(), monday(), &cal), AlertLevel::DueToday);
    }

    #[test]
    fn past_due_is_overdue() {
        let cal = WeekendsOnly;
        assert_eq!(
            alert_level_as_of(monday(), date(2026, 2, 10), &cal),
            AlertLevel::Overdue
        );
    }

    #[test]
    fn future_date_with_no_business_days_left_is_overdue() {
        // Due Saturday, seen from Friday: one calendar day out but zero
        // business days remain.
        let cal = WeekendsOnly;
        assert_eq!(
            alert_level_as_of(date(2026, 2, 20), date(2026, 2, 21), &cal),
            AlertLevel::Overdue
        );
    }

    #[test]
    fn three_day_boundary() {
        let cal = WeekendsOnly;
        assert_eq!(
            alert_level_as_of(monday(), date(2026, 2, 19), &cal),
            AlertLevel::WithinThreeDays
        );
        assert_eq!(
            alert_level_as_of(monday(), date(2026, 2, 20), &cal),
            AlertLevel::WithinSevenDays
        );
    }

    #[test]
    fn seven_and_fifteen_day_boundaries() {
        let cal = WeekendsOnly;
        // 7 business days from Monday 16th → Wednesday 25th
        assert_eq!(
            alert_level_as_of(monday(), date(2026, 2, 25), &cal),
            AlertLevel::WithinSevenDays
        );
        assert_eq!(
            alert_level_as_of(monday(), date(2026, 2, 26), &cal),
            AlertLevel::WithinFifteenDays
        );
    }

    #[test]
    fn fifteen_day_boundary_with_holiday() {
        // One holiday in between pushes the 15th business day one day out.
        let holidays = vec![Holiday::national("h1", "Feriado", date(2026, 2, 25), false)];
        let cal = CourtCalendar::new("Nacional", holidays);
        let due = cal.add_business_days(monday(), 15);
        assert_eq!(due, date(2026, 3, 10));
        assert_eq!(
            alert_level_as_of(monday(), due, &cal),
            AlertLevel::WithinFifteenDays
        );
        let sixteenth = cal.add_business_days(monday(), 16);
        assert_eq!(alert_level_as_of(monday(), sixteenth, &cal), AlertLevel::OnTrack);
    }

    #[test]
    fn levels_order_by_urgency() {
        assert!(AlertLevel::Overdue < AlertLevel::DueToday);
        assert!(AlertLevel::DueToday < AlertLevel::WithinThreeDays);
        assert!(AlertLevel::WithinFifteenDays < AlertLevel::OnTrack);
    }
}
