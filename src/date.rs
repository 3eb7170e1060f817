use std::str::FromStr;

use crate::{
    DateError, ValidityPolicy,
    consts::{DATE_SEPARATOR, MAX_DAY, MAX_MONTH, NEGATIVE_YEAR_SIGN},
    prelude::*,
    types::{Day, Month, Year},
};

/// A calendar-legal date in the proleptic Gregorian calendar.
///
/// Years use astronomical numbering: `0000` is 1 BCE and `-0001` is 2 BCE.
/// Construction always validates, so every value names a day that exists.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(
    fmt = "{}{:04}-{:02}-{:02}",
    "year_sign(*year)",
    "year.get().unsigned_abs()",
    "month.get()",
    "day.get()"
)]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

const fn year_sign(year: Year) -> &'static str {
    if year.get() < 0 { "-" } else { "" }
}

impl CalendarDate {
    /// Creates a date from numeric components.
    ///
    /// # Errors
    /// Returns `InvalidYear`, `InvalidMonth` or `InvalidDay` for components
    /// that do not form a real date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Parses `input` and applies `policy` to the result.
    ///
    /// # Errors
    /// Any [`DateError`]: format, calendar legality, then the policy boundary.
    pub fn parse_with(input: &str, policy: ValidityPolicy) -> Result<Self, DateError> {
        policy.check(input.parse()?)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// `(year, month, day)` as plain integers
    pub const fn to_tuple(&self) -> (i32, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }
}

/// Splits `[-]YYYY-MM-DD` into its numeric fields.
///
/// Month must be `01..=12` and day `01..=31`; anything else is a format error.
/// Whether the day exists in that month is decided later.
fn parse_fields(input: &str) -> Result<(i32, u8, u8), DateError> {
    let (negative, rest) = match input.as_bytes() {
        [NEGATIVE_YEAR_SIGN, rest @ ..] => (true, rest),
        bytes => (false, bytes),
    };

    let &[y0, y1, y2, y3, DATE_SEPARATOR, m0, m1, DATE_SEPARATOR, d0, d1] = rest else {
        return Err(DateError::invalid_format(input));
    };

    let fields = digits([y0, y1, y2, y3])
        .zip(digits([m0, m1]))
        .zip(digits([d0, d1]));
    let Some(((year, month), day)) = fields else {
        return Err(DateError::invalid_format(input));
    };

    let month = u8::try_from(month)
        .ok()
        .filter(|m| (1..=MAX_MONTH).contains(m));
    let day = u8::try_from(day).ok().filter(|d| (1..=MAX_DAY).contains(d));
    let (Some(month), Some(day)) = (month, day) else {
        return Err(DateError::invalid_format(input));
    };

    Ok((if negative { -year } else { year }, month, day))
}

/// Decimal value of a fixed-width run of ASCII digits.
fn digits<const N: usize>(bytes: [u8; N]) -> Option<i32> {
    bytes.iter().try_fold(0i32, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + i32::from(b - b'0'))
    })
}

/// Parses `YYYY-MM-DD` or `-YYYY-MM-DD` and checks calendar legality.
///
/// No historical boundary is applied; see [`CalendarDate::parse_with`].
impl FromStr for CalendarDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_fields(s)?;
        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_parse_iso_full_date() {
        let date = "1991-08-15".parse::<CalendarDate>().expect("failed to parse ISO date");
        assert_eq!(date.to_tuple(), (1991, 8, 15));
        assert_eq!(date.year().get(), 1991);
        assert_eq!(date.month().get(), 8);
        assert_eq!(date.day().get(), 15);
    }

    #[test]
    fn test_parse_negative_year() {
        let date = "-4712-03-01".parse::<CalendarDate>().expect("failed to parse negative year");
        assert_eq!(date.to_tuple(), (-4712, 3, 1));

        let zero = "0000-01-01".parse::<CalendarDate>().expect("failed to parse year zero");
        assert_eq!(zero.to_tuple(), (0, 1, 1));
    }

    #[test]
    fn test_parse_extreme_years() {
        struct TestCase {
            input:    &'static str,
            expected: (i32, u8, u8),
        }

        let cases = [
            TestCase {
                input:    "9999-12-31",
                expected: (9999, 12, 31),
            },
            TestCase {
                input:    "-9999-01-01",
                expected: (-9999, 1, 1),
            },
            TestCase {
                input:    "0001-01-01",
                expected: (1, 1, 1),
            },
            TestCase {
                input:    "-0000-01-01",
                expected: (0, 1, 1),
            },
        ];

        for case in &cases {
            let date = case.input.parse::<CalendarDate>().expect("extreme year should parse");
            assert_eq!(date.to_tuple(), case.expected, "{}", case.input);
        }
    }

    #[test]
    fn test_parse_format_errors() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2012-1-01",
                description: "single-digit month",
            },
            TestCase {
                input:       "2012-01-5",
                description: "single-digit day",
            },
            TestCase {
                input:       "20000-01-01",
                description: "five-digit year",
            },
            TestCase {
                input:       "1985-06-100",
                description: "three-digit day",
            },
            TestCase {
                input:       "1985-13-01",
                description: "month 13",
            },
            TestCase {
                input:       "1985-00-01",
                description: "month 00",
            },
            TestCase {
                input:       "1985-01-00",
                description: "day 00",
            },
            TestCase {
                input:       "1985-01-32",
                description: "day 32",
            },
            TestCase {
                input:       "1985/01/01",
                description: "wrong separator",
            },
            TestCase {
                input:       " 1985-01-01",
                description: "leading whitespace",
            },
            TestCase {
                input:       "--1985-01-01",
                description: "double sign",
            },
            TestCase {
                input:       "+1985-01-01",
                description: "plus sign",
            },
            TestCase {
                input:       "198a-01-01",
                description: "non-digit in year",
            },
            TestCase {
                input:       "",
                description: "empty input",
            },
        ];

        for case in &cases {
            let result = case.input.parse::<CalendarDate>();
            assert!(
                matches!(result, Err(DateError::InvalidFormat { .. })),
                "{:?} ({}) should be a format error, got {result:?}",
                case.input,
                case.description
            );
        }
    }

    #[test]
    fn test_parse_calendar_errors() {
        for input in ["2019-02-29", "1900-02-29", "2019-02-30", "2017-04-31", "2000-02-30"] {
            let err = input.parse::<CalendarDate>().expect_err("date should not exist");
            assert_eq!(err.kind(), ErrorKind::InvalidDate, "{input}");
        }

        assert!("2000-02-29".parse::<CalendarDate>().is_ok());
        assert!("2024-02-29".parse::<CalendarDate>().is_ok());
        assert!("-0004-02-29".parse::<CalendarDate>().is_ok());
        assert!("-0001-02-29".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_new_rejects_bad_month() {
        assert!(matches!(CalendarDate::new(2020, 13, 1), Err(DateError::InvalidMonth(13))));
        assert!(matches!(CalendarDate::new(2020, 0, 1), Err(DateError::InvalidMonth(0))));
    }

    #[test]
    fn test_parse_with_policy() {
        let result = CalendarDate::parse_with("1500-01-01", ValidityPolicy::GregorianAdoption);
        assert!(matches!(result, Err(DateError::PreGregorianDate(_))));

        let result = CalendarDate::parse_with("1500-01-01", ValidityPolicy::None);
        assert!(result.is_ok());

        // Format errors win over the boundary check.
        let result = CalendarDate::parse_with("1500-1-01", ValidityPolicy::GregorianAdoption);
        assert!(matches!(result, Err(DateError::InvalidFormat { .. })));
    }

    #[test]
    fn test_display() {
        let date = CalendarDate::new(1991, 8, 5).expect("valid date");
        assert_eq!(date.to_string(), "1991-08-05");

        let date = CalendarDate::new(-44, 3, 15).expect("valid date");
        assert_eq!(date.to_string(), "-0044-03-15");

        let date = CalendarDate::new(33, 4, 3).expect("valid date");
        assert_eq!(date.to_string(), "0033-04-03");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let dates: Vec<CalendarDate> = ["-0001-12-31", "0000-01-01", "1582-10-15", "1582-11-01", "2000-01-01"]
            .iter()
            .map(|s| s.parse().expect("valid date"))
            .collect();

        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_serde_string_format() {
        let date = CalendarDate::new(-500, 6, 1).expect("valid date");
        let json = serde_json::to_string(&date).expect("failed to serialize date");
        assert_eq!(json, r#""-0500-06-01""#);

        let parsed: CalendarDate = serde_json::from_str(&json).expect("failed to deserialize date");
        assert_eq!(date, parsed);

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2019-02-29""#);
        assert!(result.is_err());
    }
}
