use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    HOURS_PER_DAY, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY, MIN_MONTH, MINUTES_PER_HOUR,
    SECONDS_PER_MINUTE, TIME_SEPARATOR,
};
use crate::{DateTime, DateTimeError, Elapsed};
use std::fmt;
use std::str::FromStr;

// Calendar math

/// Proleptic Gregorian leap-year test: divisible by 4 and not by 100,
/// or divisible by 400. Uses floored modulo so zero and negative years
/// follow the same rule.
pub const fn is_leap_year(year: i64) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Length of the given month, accounting for leap-year February.
/// `month` outside 1..=12 is a precondition violation.
pub const fn days_in_month(year: i64, month: i64) -> i64 {
    debug_assert!(month >= MIN_MONTH && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// A calendar date on the proleptic Gregorian calendar.
///
/// Validated at construction: `month` in 1..=12, `day` in
/// 1..=`days_in_month`. The year is unconstrained; zero and negative
/// years extend the leap-year rule backward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i64,
    month: i64,
    day: i64,
}

impl Date {
    /// Creates a validated date.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidMonth` or `DateTimeError::InvalidDay`
    /// for out-of-range components.
    pub const fn new(year: i64, month: i64, day: i64) -> Result<Self, DateTimeError> {
        if month < MIN_MONTH || month > MAX_MONTH {
            return Err(DateTimeError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(DateTimeError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year (signed, unbounded)
    #[inline]
    pub const fn year(self) -> i64 {
        self.year
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> i64 {
        self.month
    }

    /// Returns the day of month (1..=`days_in_month`)
    #[inline]
    pub const fn day(self) -> i64 {
        self.day
    }

    /// Returns this date shifted by the given numbers of years, months and
    /// days, normalizing out-of-range fields.
    ///
    /// Months are normalized into 1..=12 first, carrying into the year;
    /// the day is then normalized one month at a time against the current
    /// month length, so a day overflow rolls into the following month
    /// rather than clamping (`2024-03-31` plus one month is `2024-05-01`).
    pub fn add(self, years: i64, months: i64, days: i64) -> Self {
        let mut year = self.year + years;
        let mut month = self.month + months;
        while month > MAX_MONTH {
            year += 1;
            month -= MAX_MONTH;
        }
        while month < MIN_MONTH {
            year -= 1;
            month += MAX_MONTH;
        }

        let mut day = self.day + days;
        while day > days_in_month(year, month) {
            day -= days_in_month(year, month);
            month += 1;
            if month > MAX_MONTH {
                year += 1;
                month = MIN_MONTH;
            }
        }
        while day < MIN_DAY {
            month -= 1;
            if month < MIN_MONTH {
                year -= 1;
                month = MAX_MONTH;
            }
            day += days_in_month(year, month);
        }

        Self { year, month, day }
    }

    /// Inverse of [`Date::add`].
    pub fn subtract(self, years: i64, months: i64, days: i64) -> Self {
        self.add(-years, -months, -days)
    }

    /// Elapsed time from `other` to `self`, dates compared at midnight.
    pub fn difference(&self, other: &Self) -> Elapsed {
        DateTime::from(*self).difference(&DateTime::from(*other))
    }

    /// Renders this date through the token formatter
    /// (time tokens render as zero).
    pub fn format(&self, template: &str) -> String {
        DateTime::from(*self).format(template)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            self.year, self.month, self.day
        )
    }
}

impl FromStr for Date {
    type Err = DateTimeError;

    /// Parses the canonical `YYYY-MM-DD` form. Components are split from
    /// the right so a leading minus sign on the year survives.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateTimeError::EmptyInput);
        }

        let (rest, day) = trimmed
            .rsplit_once(DATE_SEPARATOR)
            .ok_or_else(|| DateTimeError::InvalidFormat(trimmed.to_owned()))?;
        let (year, month) = rest
            .rsplit_once(DATE_SEPARATOR)
            .ok_or_else(|| DateTimeError::InvalidFormat(trimmed.to_owned()))?;

        Self::new(parse_field(year)?, parse_field(month)?, parse_field(day)?)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A wall-clock time of day with no date component.
///
/// Validated at construction: hour in 0..=23, minute and second in
/// 0..=59. Arithmetic wraps around the day boundary instead of carrying
/// into a day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: i64,
    minute: i64,
    second: i64,
}

impl Time {
    /// Creates a validated time of day.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidHour`, `InvalidMinute` or
    /// `InvalidSecond` for out-of-range components.
    pub const fn new(hour: i64, minute: i64, second: i64) -> Result<Self, DateTimeError> {
        if hour < 0 || hour >= HOURS_PER_DAY {
            return Err(DateTimeError::InvalidHour(hour));
        }
        if minute < 0 || minute >= MINUTES_PER_HOUR {
            return Err(DateTimeError::InvalidMinute(minute));
        }
        if second < 0 || second >= SECONDS_PER_MINUTE {
            return Err(DateTimeError::InvalidSecond(second));
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour (0..=23 for a normalized value)
    #[inline]
    pub const fn hour(self) -> i64 {
        self.hour
    }

    /// Returns the minute (0..=59 for a normalized value)
    #[inline]
    pub const fn minute(self) -> i64 {
        self.minute
    }

    /// Returns the second (0..=59 for a normalized value)
    #[inline]
    pub const fn second(self) -> i64 {
        self.second
    }

    /// Returns this time shifted forward, carrying seconds into minutes
    /// and minutes into hours, with the hour wrapped into 0..=23 by
    /// floored modulo.
    ///
    /// The second→minute and minute→hour carries use truncating division,
    /// while the hour wrap is floored. With negative arguments the carries
    /// round toward zero, so the minute or second field can come out
    /// negative; [`Time::subtract`] is the supported inverse and restores
    /// the invariant with its borrow pass.
    pub fn add(self, hours: i64, minutes: i64, seconds: i64) -> Self {
        let mut second = self.second + seconds;
        let mut minute = self.minute + second / SECONDS_PER_MINUTE;
        second %= SECONDS_PER_MINUTE;

        minute += minutes;
        let mut hour = self.hour + minute / MINUTES_PER_HOUR;
        minute %= MINUTES_PER_HOUR;

        hour += hours;
        hour = hour.rem_euclid(HOURS_PER_DAY);

        Self {
            hour,
            minute,
            second,
        }
    }

    /// Returns this time shifted backward: negated [`Time::add`] followed
    /// by a borrow pass bringing second, minute and hour back into range.
    pub fn subtract(self, hours: i64, minutes: i64, seconds: i64) -> Self {
        let mut t = self.add(-hours, -minutes, -seconds);
        if t.second < 0 {
            t.second += SECONDS_PER_MINUTE;
            t.minute -= 1;
        }
        if t.minute < 0 {
            t.minute += MINUTES_PER_HOUR;
            t.hour -= 1;
        }
        if t.hour < 0 {
            t.hour += HOURS_PER_DAY;
        }
        t
    }

    /// Elapsed time from `other` to `self` on the same (unspecified) day;
    /// an earlier `self` borrows a day, yielding -1 days.
    pub fn difference(&self, other: &Self) -> Elapsed {
        DateTime::from(*self).difference(&DateTime::from(*other))
    }

    /// Renders this time through the token formatter
    /// (date tokens render as zero).
    pub fn format(&self, template: &str) -> String {
        DateTime::from(*self).format(template)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}{TIME_SEPARATOR}{:02}{TIME_SEPARATOR}{:02}",
            self.hour, self.minute, self.second
        )
    }
}

impl FromStr for Time {
    type Err = DateTimeError;

    /// Parses the canonical `HH:mm:SS` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateTimeError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(DateTimeError::InvalidFormat(trimmed.to_owned()));
        }

        Self::new(
            parse_field(parts[0])?,
            parse_field(parts[1])?,
            parse_field(parts[2])?,
        )
    }
}

impl serde::Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn parse_field(s: &str) -> Result<i64, DateTimeError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| DateTimeError::InvalidFormat(s.trim().to_owned()))
}
