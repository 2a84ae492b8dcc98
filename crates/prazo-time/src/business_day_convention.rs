//! Business-day adjustment conventions.

/// How to adjust a date that falls on a non-business day.
///
/// Brazilian procedure rolls a deadline that expires on a non-business day
/// forward to the next business day (CLT art. 775 §1º); `Following` is the
/// convention deadline computation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Choose the first business day on or after the given date.
    Following,
    /// Choose the first business day on or before the given date.
    Preceding,
    /// Do not adjust (keep the original date).
    Unadjusted,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{s}")
    }
}
