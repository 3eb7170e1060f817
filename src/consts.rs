/// Largest absolute year accepted (four digits, either sign)
pub const MAX_YEAR: i16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Largest day value the shape check lets through
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: u8 = b'-';
/// Leading sign marking an astronomical negative year
pub const NEGATIVE_YEAR_SIGN: u8 = b'-';

/// First day of the Gregorian calendar: 1582-10-15
pub const GREGORIAN_ADOPTION: (i16, u8, u8) = (1582, 10, 15);
/// Earliest date the integer JDN formula is published for: -4712-03-01
pub const FORMULA_LIMIT: (i16, u8, u8) = (-4712, 3, 1);

// Fliegel–Van Flandern offsets
pub(crate) const JDN_YEAR_OFFSET: i64 = 4800;
pub(crate) const JDN_CENTURY_OFFSET: i64 = 4900;
pub(crate) const JDN_EPOCH_OFFSET: i64 = 32075;
/// Days in four Julian years
pub(crate) const DAYS_PER_FOUR_YEARS: i64 = 1461;
/// Twelve times the mean month length of the March-based year
pub(crate) const MONTH_DAY_FACTOR: i64 = 367;
