//! Holiday records supplied by the court-holiday registry.
//!
//! A record is either national (observed in every jurisdiction) or scoped
//! to a single court, and either fixed to one calendar date or recurring
//! every year on the same month/day.  Records are immutable: whether one
//! applies to a given `(date, court)` pair is a pure function of its
//! fields.

use crate::date::Date;

/// Territorial scope of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HolidayScope {
    /// Observed in every jurisdiction.
    National,
    /// Observed only by the court named in the record's `court` field.
    Court,
}

/// A designated non-working day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Holiday {
    /// Registry identifier.
    pub id: String,
    /// Display label (e.g. `"Tiradentes"`).
    pub name: String,
    /// Calendar date.  For recurring holidays only the month/day is
    /// significant; the stored year is a placeholder.
    pub date: Date,
    /// Territorial scope.
    pub scope: HolidayScope,
    /// Jurisdiction the record is bound to, for court-scoped holidays.
    #[cfg_attr(feature = "serde", serde(default))]
    pub court: Option<String>,
    /// Whether the holiday recurs every year on the same month/day.
    #[cfg_attr(feature = "serde", serde(default))]
    pub recurring: bool,
}

impl Holiday {
    /// Build a national holiday.
    pub fn national(id: impl Into<String>, name: impl Into<String>, date: Date, recurring: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            scope: HolidayScope::National,
            court: None,
            recurring,
        }
    }

    /// Build a holiday scoped to a single court.
    pub fn for_court(
        id: impl Into<String>,
        name: impl Into<String>,
        date: Date,
        court: impl Into<String>,
        recurring: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            scope: HolidayScope::Court,
            court: Some(court.into()),
            recurring,
        }
    }

    /// Return `true` if this record designates `date` a holiday for the
    /// given jurisdiction.
    ///
    /// Scope filtering: a non-national record is skipped only when it names
    /// a court, a query court is present, and the two differ.  A query with
    /// no court therefore matches every scope-eligible record, including
    /// court-bound ones — the registry's historical behaviour, kept as-is.
    ///
    /// Recurring records compare month/day only; a record stored on a leap
    /// day (`02-29`) never matches a non-leap year.
    pub fn applies_to(&self, date: Date, court: Option<&str>) -> bool {
        if self.scope != HolidayScope::National {
            if let (Some(own), Some(queried)) = (self.court.as_deref(), court) {
                if own != queried {
                    return false;
                }
            }
        }
        if self.recurring {
            self.date.month_day() == date.month_day()
        } else {
            self.date == date
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn exact_date_match() {
        let h = Holiday::national("h1", "Feriado", date(2026, 1, 1), false);
        assert!(h.applies_to(date(2026, 1, 1), None));
        assert!(!h.applies_to(date(2027, 1, 1), None));
    }

    #[test]
    fn recurring_ignores_year() {
        let h = Holiday::national("h2", "Natal", date(2020, 12, 25), true);
        assert!(h.applies_to(date(2026, 12, 25), None));
        assert!(h.applies_to(date(2027, 12, 25), None));
        assert!(!h.applies_to(date(2026, 12, 24), None));
    }

    #[test]
    fn recurring_leap_day_never_matches_non_leap_year() {
        let h = Holiday::national("h3", "Bissexto", date(2020, 2, 29), true);
        assert!(h.applies_to(date(2024, 2, 29), None));
        assert!(!h.applies_to(date(2026, 2, 28), None));
        assert!(!h.applies_to(date(2026, 3, 1), None));
    }

    #[test]
    fn court_scope_isolation() {
        let h = Holiday::for_court("h4", "Feriado local", date(2026, 6, 10), "TRT5", false);
        assert!(h.applies_to(date(2026, 6, 10), Some("TRT5")));
        assert!(!h.applies_to(date(2026, 6, 10), Some("TRT2")));
    }

    #[test]
    fn court_scoped_record_matches_query_without_court() {
        // Registry behaviour kept as-is: with no query court the scope
        // filter does not engage.
        let h = Holiday::for_court("h5", "Feriado local", date(2026, 6, 10), "TRT5", false);
        assert!(h.applies_to(date(2026, 6, 10), None));
    }

    #[test]
    fn national_record_ignores_query_court() {
        let h = Holiday::national("h6", "Tiradentes", date(2026, 4, 21), true);
        assert!(h.applies_to(date(2026, 4, 21), Some("TRT2")));
        assert!(h.applies_to(date(2027, 4, 21), Some("TRT15")));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_registry_json() {
        let json = r#"{
            "id": "f-ba-1",
            "name": "Independência da Bahia",
            "date": "2026-07-02",
            "scope": "court",
            "court": "TRT5",
            "recurring": true
        }"#;
        let h: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(h.scope, HolidayScope::Court);
        assert_eq!(h.court.as_deref(), Some("TRT5"));
        assert!(h.applies_to(date(2027, 7, 2), Some("TRT5")));
    }
}
