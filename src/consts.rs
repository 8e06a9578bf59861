/// Minimum valid month (January)
pub const MIN_MONTH: i64 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: i64 = 12;

/// First day of any month
pub const MIN_DAY: i64 = 1;

/// Month number for February
pub const FEBRUARY: i64 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: i64 = 29;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [i64; 13] = [
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

/// Days in a common year
pub const DAYS_PER_YEAR: i64 = 365;
/// Days in a leap year
pub const DAYS_PER_LEAP_YEAR: i64 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Hours in a day
pub const HOURS_PER_DAY: i64 = 24;
/// Minutes in an hour
pub const MINUTES_PER_HOUR: i64 = 60;
/// Seconds in a minute
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds in an hour
pub const SECONDS_PER_HOUR: i64 = 3600;
/// Seconds in a day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Time component separator
pub const TIME_SEPARATOR: char = ':';
