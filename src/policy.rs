use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, DateError, UnknownPolicy,
    consts::{FORMULA_LIMIT, GREGORIAN_ADOPTION},
};

/// Lower boundary applied to otherwise valid dates.
///
/// The default is [`ValidityPolicy::GregorianAdoption`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidityPolicy {
    /// Accept every calendar-legal date.
    None,
    /// Reject dates before 1582-10-15.
    #[default]
    GregorianAdoption,
    /// Reject dates before -4712-03-01.
    FormulaLimit,
}

impl ValidityPolicy {
    /// Earliest accepted `(year, month, day)`, if any.
    pub const fn boundary(self) -> Option<(i16, u8, u8)> {
        match self {
            Self::None => None,
            Self::GregorianAdoption => Some(GREGORIAN_ADOPTION),
            Self::FormulaLimit => Some(FORMULA_LIMIT),
        }
    }

    /// Checks `date` against the boundary. Dates on the boundary pass.
    ///
    /// # Errors
    /// Returns `DateError::PreGregorianDate` or `DateError::BeforeFormulaLimit`
    /// when the date is strictly before the boundary.
    pub fn check(self, date: CalendarDate) -> Result<CalendarDate, DateError> {
        let ((year, month, day), reject): (_, fn(CalendarDate) -> DateError) = match self {
            Self::None => return Ok(date),
            Self::GregorianAdoption => (GREGORIAN_ADOPTION, DateError::PreGregorianDate),
            Self::FormulaLimit => (FORMULA_LIMIT, DateError::BeforeFormulaLimit),
        };
        if date.to_tuple() >= (i32::from(year), month, day) {
            Ok(date)
        } else {
            Err(reject(date))
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::GregorianAdoption => "gregorian-adoption",
            Self::FormulaLimit => "formula-limit",
        }
    }
}

impl fmt::Display for ValidityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValidityPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "none" => Ok(Self::None),
            "gregorian-adoption" | "gregorian" => Ok(Self::GregorianAdoption),
            "formula-limit" | "formula" => Ok(Self::FormulaLimit),
            _ => Err(UnknownPolicy(s.to_owned())),
        }
    }
}
