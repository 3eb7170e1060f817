use std::fmt;

use crate::CalendarDate;

/// Coarse category of a [`DateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text does not have the `YYYY-MM-DD` shape.
    InvalidFormat,
    /// The shape is right but the date does not exist in the calendar.
    InvalidDate,
    /// The date exists but lies before the boundary of the active policy.
    OutOfDomain,
}

/// Error produced while turning text or components into a [`CalendarDate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input is not `YYYY-MM-DD` or `-YYYY-MM-DD` with zero-padded fields.
    #[error("{input:?} is an invalid date format, expected YYYY-MM-DD")]
    InvalidFormat { input: String },

    /// Year outside `-9999..=9999`.
    #[error("invalid year: {0} (must be at most four digits)")]
    InvalidYear(i32),

    /// Month outside `1..=12`.
    #[error("invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    /// Day is zero or past the end of the month for that year.
    #[error("invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    /// Date precedes the Gregorian reform (1582-10-15).
    #[error("{0} is before the Gregorian calendar was adopted on 1582-10-15")]
    PreGregorianDate(CalendarDate),

    /// Date precedes the domain of the Julian Day Number formula (-4712-03-01).
    #[error("{0} is before -4712-03-01, the earliest date the JDN formula supports")]
    BeforeFormulaLimit(CalendarDate),
}

impl DateError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        Self::InvalidFormat {
            input: input.to_owned(),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::InvalidYear(_) | Self::InvalidMonth(_) | Self::InvalidDay { .. } => {
                ErrorKind::InvalidDate
            },
            Self::PreGregorianDate(_) | Self::BeforeFormulaLimit(_) => ErrorKind::OutOfDomain,
        }
    }
}

/// Which argument of a two-date computation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    First,
    Second,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("date1"),
            Self::Second => f.write_str("date2"),
        }
    }
}

/// Error returned by the day-delta computation, naming the offending argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operand}: {source}")]
pub struct DeltaError {
    pub operand: Operand,
    #[source]
    pub source:  DateError,
}

impl DeltaError {
    pub const fn kind(&self) -> ErrorKind {
        self.source.kind()
    }
}

/// A validity policy name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown validity policy {0:?} (expected none, gregorian-adoption or formula-limit)")]
pub struct UnknownPolicy(pub String);
