//! Julian Day Numbers for proleptic Gregorian dates.
//!
//! The conversion is the integer form published by Fliegel and Van Flandern:
//!
//! ```text
//! A   = (month - 14) / 12
//! JDN = 1461 (year + 4800 + A) / 4
//!     + 367 (month - 2 - 12 A) / 12
//!     - 3 ((year + 4900 + A) / 100) / 4
//!     + day - 32075
//! ```
//!
//! `A` is -1 for January and February and 0 otherwise. From -4712-03-01
//! onward every other dividend is non-negative, so truncating and flooring
//! division agree. Flooring is used here, which keeps the result exact for
//! earlier years as well.

use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate,
    consts::{DAYS_PER_FOUR_YEARS, JDN_CENTURY_OFFSET, JDN_EPOCH_OFFSET, JDN_YEAR_OFFSET, MONTH_DAY_FACTOR},
    prelude::*,
};

/// Count of days since noon UTC on -4713-11-24 (Gregorian).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JulianDayNumber(i64);

impl JulianDayNumber {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Converts a validated date. Cannot fail.
    pub const fn from_date(date: CalendarDate) -> Self {
        let (year, month, day) = date.to_tuple();
        let (year, month, day) = (year as i64, month as i64, day as i64);

        let a = (month - 14) / 12;
        let b = DAYS_PER_FOUR_YEARS * (year + JDN_YEAR_OFFSET + a);
        let c = MONTH_DAY_FACTOR * (month - 2 - 12 * a);
        let e = (year + JDN_CENTURY_OFFSET + a).div_euclid(100);

        Self(b.div_euclid(4) + c / 12 - (3 * e).div_euclid(4) + day - JDN_EPOCH_OFFSET)
    }

    /// Inverse of [`from_date`](Self::from_date).
    ///
    /// Returns `None` when the day falls outside the years a [`CalendarDate`]
    /// can hold.
    pub fn to_calendar_date(self) -> Option<CalendarDate> {
        let f = self.0 + 1401 + ((4 * self.0 + 274_277).div_euclid(146_097) * 3).div_euclid(4) - 38;
        let e = 4 * f + 3;
        let g = e.rem_euclid(DAYS_PER_FOUR_YEARS).div_euclid(4);
        let h = 5 * g + 2;
        let day = h.rem_euclid(153).div_euclid(5) + 1;
        let month = (h.div_euclid(153) + 2).rem_euclid(12) + 1;
        let year = e.div_euclid(DAYS_PER_FOUR_YEARS) - 4716 + (12 + 2 - month).div_euclid(12);

        let year = i32::try_from(year).ok()?;
        let month = u8::try_from(month).ok()?;
        let day = u8::try_from(day).ok()?;
        CalendarDate::new(year, month, day).ok()
    }
}

impl From<CalendarDate> for JulianDayNumber {
    fn from(date: CalendarDate) -> Self {
        Self::from_date(date)
    }
}

/// Signed day count between two Julian Day Numbers.
impl Sub for JulianDayNumber {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl CalendarDate {
    pub const fn julian_day(self) -> JulianDayNumber {
        JulianDayNumber::from_date(self)
    }
}
