//! Named procedural deadline types.
//!
//! A static catalog of the labor-law deadlines the office files most, each
//! with its statutory day count.  The catalog is configuration: callers
//! look an entry up by code to pre-fill a computation, then hand the count
//! to the calendar.

use crate::business_day_convention::BusinessDayConvention;
use crate::calendar::Calendar;
use crate::date::Date;

/// Unit a deadline's count is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DeadlineUnit {
    /// Business days (dias úteis), CPC art. 219 counting.
    BusinessDays,
    /// Clock hours (e.g. the 48-hour payment deadline of CLT art. 880).
    Hours,
}

/// A named procedural deadline with its statutory count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeadlineType {
    /// Stable lookup code.
    pub code: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Statutory count, in `unit`.
    pub day_count: u32,
    /// Unit the count is expressed in.
    pub unit: DeadlineUnit,
}

impl DeadlineType {
    /// Compute the due date for this deadline starting at `start`.
    ///
    /// Business-day deadlines advance `day_count` business days.  Hour
    /// deadlines run in clock time: the count is converted to calendar
    /// days (rounding up) and the result rolled to the next business day
    /// when it lands on a non-business one (CLT art. 775 §1º).
    pub fn due_date(&self, start: Date, calendar: &dyn Calendar) -> Date {
        match self.unit {
            DeadlineUnit::BusinessDays => calendar.add_business_days(start, self.day_count),
            DeadlineUnit::Hours => {
                let days = self.day_count.div_ceil(24);
                let landed = start + days as i32;
                calendar.adjust(landed, BusinessDayConvention::Following)
            }
        }
    }
}

/// The static deadline catalog.
///
/// Counts per CLT/CPC as applied in labor procedure.
pub const CATALOG: &[DeadlineType] = &[
    DeadlineType {
        code: "contestacao",
        label: "Contestação",
        day_count: 15,
        unit: DeadlineUnit::BusinessDays,
    },
    DeadlineType {
        code: "recurso-ordinario",
        label: "Recurso Ordinário",
        day_count: 8,
        unit: DeadlineUnit::BusinessDays,
    },
    DeadlineType {
        code: "contrarrazoes",
        label: "Contrarrazões",
        day_count: 8,
        unit: DeadlineUnit::BusinessDays,
    },
    DeadlineType {
        code: "embargos-declaracao",
        label: "Embargos de Declaração",
        day_count: 5,
        unit: DeadlineUnit::BusinessDays,
    },
    DeadlineType {
        code: "recurso-revista",
        label: "Recurso de Revista",
        day_count: 8,
        unit: DeadlineUnit::BusinessDays,
    },
    DeadlineType {
        code: "agravo-instrumento",
        label: "Agravo de Instrumento",
        day_count: 8,
        unit: DeadlineUnit::BusinessDays,
    },
    DeadlineType {
        code: "agravo-peticao",
        label: "Agravo de Petição",
        day_count: 8,
        unit: DeadlineUnit::BusinessDays,
    },
    DeadlineType {
        code: "embargos-execucao",
        label: "Embargos à Execução",
        day_count: 5,
        unit: DeadlineUnit::BusinessDays,
    },
    DeadlineType {
        code: "impugnacao-calculos",
        label: "Impugnação aos Cálculos",
        day_count: 8,
        unit: DeadlineUnit::BusinessDays,
    },
    DeadlineType {
        code: "pagamento-execucao",
        label: "Pagamento em Execução",
        day_count: 48,
        unit: DeadlineUnit::Hours,
    },
];

/// Look a deadline type up by its code.
pub fn lookup(code: &str) -> Option<&'static DeadlineType> {
    CATALOG.iter().find(|t| t.code == code)
}
