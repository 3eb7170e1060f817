//! Whole-day differences between proleptic Gregorian dates.
//!
//! Each date is converted to a Julian Day Number with integer arithmetic and
//! the two numbers are differenced.
//!
//! # Counting convention
//!
//! The result counts the days strictly *between* the two dates:
//! `|JDN(a) - JDN(b)| - 1`. Adjacent days give 0, and `2012-01-01` to
//! `2012-01-10` gives 8, not 9. When both input strings are identical the
//! result is defined to be 0. An inclusive count is exactly one more than
//! [`DayDelta::get`] for distinct dates.
//!
//! ```
//! use day_delta::compute_day_delta;
//!
//! assert_eq!(compute_day_delta("2012-01-01", "2012-01-10").map(|d| d.get()), Ok(8));
//! assert_eq!(compute_day_delta("2012-01-10", "2012-01-10").map(|d| d.get()), Ok(0));
//! ```

mod consts;
mod date;
mod diagnostics;
mod error;
mod jdn;
mod policy;
mod prelude;
mod types;

pub use consts::*;
pub use date::CalendarDate;
#[cfg(feature = "log")]
pub use diagnostics::LogSink;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NoopSink, Severity};
pub use error::{DateError, DeltaError, ErrorKind, Operand, UnknownPolicy};
pub use jdn::JulianDayNumber;
pub use policy::ValidityPolicy;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of days strictly between two dates. Never negative.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DayDelta(u64);

impl DayDelta {
    /// Applies the counting convention to two Julian Day Numbers.
    ///
    /// Equal numbers give 0 rather than -1.
    pub const fn between(a: JulianDayNumber, b: JulianDayNumber) -> Self {
        Self(a.get().abs_diff(b.get()).saturating_sub(1))
    }

    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Validates and differences dates under a fixed [`ValidityPolicy`],
/// reporting to a [`DiagnosticSink`].
#[derive(Debug, Clone)]
pub struct DeltaCalculator<S = NoopSink> {
    policy: ValidityPolicy,
    sink:   S,
}

impl DeltaCalculator {
    pub const fn new(policy: ValidityPolicy) -> Self {
        Self { policy, sink: NoopSink }
    }
}

impl Default for DeltaCalculator {
    fn default() -> Self {
        Self::new(ValidityPolicy::default())
    }
}

impl<S: DiagnosticSink> DeltaCalculator<S> {
    /// Replaces the diagnostic sink.
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> DeltaCalculator<T> {
        DeltaCalculator {
            policy: self.policy,
            sink,
        }
    }

    pub const fn policy(&self) -> ValidityPolicy {
        self.policy
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Parses and validates one input under the configured policy.
    ///
    /// # Errors
    /// Returns a [`DeltaError`] carrying `operand` and the validation failure.
    pub fn parse(&self, operand: Operand, input: &str) -> Result<CalendarDate, DeltaError> {
        match CalendarDate::parse_with(input, self.policy) {
            Ok(date) => {
                self.sink.record(Diagnostic::Parsed { operand, date });
                if date.is_leap_year() {
                    self.sink.record(Diagnostic::LeapYear {
                        year: date.year().get(),
                    });
                }
                Ok(date)
            },
            Err(source) => {
                self.sink.record(Diagnostic::Rejected {
                    operand,
                    input: input.to_owned(),
                    error: source.clone(),
                });
                Err(DeltaError { operand, source })
            },
        }
    }

    /// Julian Day Number of a validated date.
    pub fn julian_day(&self, date: CalendarDate) -> JulianDayNumber {
        let jdn = date.julian_day();
        self.sink.record(Diagnostic::Converted { date, jdn });
        jdn
    }

    /// Days strictly between `date1` and `date2`; 0 when the strings are identical.
    ///
    /// Both inputs are validated, `date1` first, before anything is computed.
    ///
    /// # Errors
    /// Returns the first validation failure, tagged with the argument it came from.
    pub fn day_delta(&self, date1: &str, date2: &str) -> Result<DayDelta, DeltaError> {
        self.report(date1, date2).map(|report| report.delta)
    }

    /// Like [`day_delta`](Self::day_delta), but also returns both dates and
    /// their Julian Day Numbers.
    ///
    /// Nothing is returned unless both inputs are valid.
    ///
    /// # Errors
    /// Returns the first validation failure, tagged with the argument it came from.
    pub fn report(&self, date1: &str, date2: &str) -> Result<DeltaReport, DeltaError> {
        let first = self.parse(Operand::First, date1)?;
        let second = self.parse(Operand::Second, date2)?;

        let first_jdn = self.julian_day(first);
        let second_jdn = self.julian_day(second);
        let delta = if date1 == date2 {
            DayDelta::default()
        } else {
            DayDelta::between(first_jdn, second_jdn)
        };

        self.sink.record(Diagnostic::Computed { first, second, delta });
        Ok(DeltaReport {
            first,
            second,
            first_jdn,
            second_jdn,
            delta,
        })
    }
}

/// Both validated dates of a computation together with its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeltaReport {
    pub first:      CalendarDate,
    pub second:     CalendarDate,
    pub first_jdn:  JulianDayNumber,
    pub second_jdn: JulianDayNumber,
    pub delta:      DayDelta,
}

/// Days strictly between two `YYYY-MM-DD` dates under the default
/// [`ValidityPolicy::GregorianAdoption`] policy.
///
/// Identical strings give 0. See the crate docs for the counting convention.
///
/// # Errors
/// Returns a [`DeltaError`] naming which date failed and why.
pub fn compute_day_delta(date1: &str, date2: &str) -> Result<DayDelta, DeltaError> {
    DeltaCalculator::new(ValidityPolicy::default()).day_delta(date1, date2)
}
