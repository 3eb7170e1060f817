//! Structured reporting for the validator and the day-delta computation.
//!
//! Nothing in this crate writes to a global logger. Callers that want to see
//! what happened pass a [`DiagnosticSink`]; [`NoopSink`] is used otherwise.

use std::sync::{Mutex, PoisonError};

use crate::{CalendarDate, DateError, DayDelta, JulianDayNumber, Operand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Error,
}

/// One event observed while computing a day delta.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// An input string was accepted.
    Parsed { operand: Operand, date: CalendarDate },
    /// The accepted date falls in a leap year.
    LeapYear { year: i32 },
    /// An input string was rejected.
    Rejected { operand: Operand, input: String, error: DateError },
    /// A date was mapped to its Julian Day Number.
    Converted { date: CalendarDate, jdn: JulianDayNumber },
    /// The final result, after the same-input rule was applied.
    Computed { first: CalendarDate, second: CalendarDate, delta: DayDelta },
}

impl Diagnostic {
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Parsed { .. } | Self::LeapYear { .. } | Self::Converted { .. } => Severity::Debug,
            Self::Computed { .. } => Severity::Info,
            Self::Rejected { .. } => Severity::Error,
        }
    }
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
    fn record(&self, diagnostic: Diagnostic);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    #[inline]
    fn record(&self, _diagnostic: Diagnostic) {}
}

/// Keeps every diagnostic in memory, in order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl DiagnosticSink for CollectingSink {
    fn record(&self, diagnostic: Diagnostic) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn record(&self, diagnostic: Diagnostic) {
        (**self).record(diagnostic);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Box<T> {
    fn record(&self, diagnostic: Diagnostic) {
        (**self).record(diagnostic);
    }
}

/// Forwards diagnostics to the `log` facade.
#[cfg(feature = "log")]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogSink;

#[cfg(feature = "log")]
impl DiagnosticSink for LogSink {
    fn record(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::Parsed { operand, date } => log::debug!("{operand}: parsed {date}"),
            Diagnostic::LeapYear { year } => log::debug!("{year} is a leap year"),
            Diagnostic::Rejected { operand, input, error } => {
                log::error!("{operand}: rejected {input:?}: {error}");
            },
            Diagnostic::Converted { date, jdn } => log::debug!("{date} is JDN {jdn}"),
            Diagnostic::Computed { first, second, delta } => {
                log::info!("{delta} days between {first} and {second}");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        sink.record(Diagnostic::LeapYear { year: 2024 });
        sink.record(Diagnostic::LeapYear { year: 2000 });

        assert_eq!(
            sink.snapshot(),
            vec![Diagnostic::LeapYear { year: 2024 }, Diagnostic::LeapYear { year: 2000 }]
        );
        assert_eq!(sink.take().len(), 2);
        assert!(sink.snapshot().is_empty());
    }

    #[test]
    fn test_reference_forwards() {
        let sink = CollectingSink::new();
        let by_ref: &dyn DiagnosticSink = &sink;
        by_ref.record(Diagnostic::LeapYear { year: 4 });
        assert_eq!(sink.take(), vec![Diagnostic::LeapYear { year: 4 }]);
    }

    #[test]
    fn test_severity() {
        let error = Diagnostic::Rejected {
            operand: Operand::First,
            input:   "x".to_owned(),
            error:   DateError::InvalidMonth(13),
        };
        assert_eq!(error.severity(), Severity::Error);
        assert_eq!(Diagnostic::LeapYear { year: 2024 }.severity(), Severity::Debug);
    }
}
