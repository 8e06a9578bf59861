mod consts;
mod format;
mod prelude;
mod types;

pub use consts::*;
pub use format::render;
pub use types::{Date, Time, days_in_month, is_leap_year};

use crate::prelude::*;

/// Validation and parse errors for date/time values.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateTimeError {
    #[display(fmt = "Invalid month: {_0} (must be 1-12)")]
    InvalidMonth(i64),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i64, month: i64, day: i64 },
    #[display(fmt = "Invalid hour: {_0} (must be 0-23)")]
    InvalidHour(i64),
    #[display(fmt = "Invalid minute: {_0} (must be 0-59)")]
    InvalidMinute(i64),
    #[display(fmt = "Invalid second: {_0} (must be 0-59)")]
    InvalidSecond(i64),
    #[display(fmt = "Invalid date/time format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Empty date/time string")]
    EmptyInput,
}

impl std::error::Error for DateTimeError {}

/// The six-field projection shared by the difference and format
/// contracts. A [`Date`] projects with zero time fields, a [`Time`]
/// with zero date fields, so both kinds flow through the same
/// arithmetic without sentinel values leaking into the value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
}

/// Signed elapsed time between two date/time values.
///
/// The sign lives entirely in `days`: the borrow step in the difference
/// keeps `hours`, `minutes` and `seconds` non-negative, so one second
/// before midnight reads as -1 days, 23:59:59.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, serde::Serialize, serde::Deserialize,
)]
#[display(fmt = "{days} days, {hours} hours, {minutes} minutes, {seconds} seconds")]
pub struct Elapsed {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Either kind of value the calculator works with: a calendar date or a
/// wall-clock time. The shared difference/format contract operates on
/// the [`Fields`] projection of each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From)]
pub enum DateTime {
    #[display(fmt = "{_0}")]
    Calendar(Date),
    #[display(fmt = "{_0}")]
    Clock(Time),
}

impl DateTime {
    /// Projects this value onto the six shared fields, with zeros for
    /// the fields the variant does not carry.
    pub const fn fields(&self) -> Fields {
        match *self {
            Self::Calendar(d) => Fields {
                year: d.year(),
                month: d.month(),
                day: d.day(),
                hour: 0,
                minute: 0,
                second: 0,
            },
            Self::Clock(t) => Fields {
                year: 0,
                month: 0,
                day: 0,
                hour: t.hour(),
                minute: t.minute(),
                second: t.second(),
            },
        }
    }

    /// Elapsed time from `other` to `self`; see [`elapsed_between`].
    pub fn difference(&self, other: &Self) -> Elapsed {
        elapsed_between(&self.fields(), &other.fields())
    }

    /// Renders this value through the token formatter; see [`render`].
    pub fn format(&self, template: &str) -> String {
        render(&self.fields(), template)
    }
}

/// Linear proleptic day index: the value's day of month plus 365 or 366
/// for every year between year 0 and the value's year. Years are summed
/// forward for positive years and subtracted for negative ones, so the
/// index stays linear across year 0. Not a public epoch, only
/// differences of two indices are meaningful.
fn day_index(fields: &Fields) -> i64 {
    let mut days = fields.day;
    if fields.year >= 0 {
        for y in 0..fields.year {
            days += if is_leap_year(y) {
                DAYS_PER_LEAP_YEAR
            } else {
                DAYS_PER_YEAR
            };
        }
    } else {
        for y in fields.year..0 {
            days -= if is_leap_year(y) {
                DAYS_PER_LEAP_YEAR
            } else {
                DAYS_PER_YEAR
            };
        }
    }
    for m in MIN_MONTH..fields.month {
        days += days_in_month(fields.year, m);
    }
    days
}

const fn seconds_of_day(fields: &Fields) -> i64 {
    fields.hour * SECONDS_PER_HOUR + fields.minute * SECONDS_PER_MINUTE + fields.second
}

/// Elapsed time from `b` to `a` over the six-field projection.
///
/// Computes signed day and time-of-day deltas; a negative time delta
/// borrows one day, so the time components always come out in
/// 0..=23 / 0..=59 and the sign is carried by the day count alone.
pub fn elapsed_between(a: &Fields, b: &Fields) -> Elapsed {
    let mut day_diff = day_index(a) - day_index(b);
    let mut time_diff = seconds_of_day(a) - seconds_of_day(b);

    if time_diff < 0 {
        day_diff -= 1;
        time_diff += SECONDS_PER_DAY;
    }

    Elapsed {
        days: day_diff,
        hours: time_diff / SECONDS_PER_HOUR,
        minutes: time_diff % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
        seconds: time_diff % SECONDS_PER_MINUTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i64, month: i64, day: i64) -> Date {
        Date::new(year, month, day).unwrap()
    }

    fn time(hour: i64, minute: i64, second: i64) -> Time {
        Time::new(hour, minute, second).unwrap()
    }

    #[test]
    fn test_difference_one_common_year() {
        // Jan 1 to Jan 1 across 2023 (non-leap): exactly 365 days
        let elapsed = date(2024, 1, 1).difference(&date(2023, 1, 1));
        assert_eq!(
            elapsed,
            Elapsed {
                days: 365,
                hours: 0,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_difference_across_leap_day() {
        let elapsed = date(2025, 1, 1).difference(&date(2024, 1, 1));
        assert_eq!(elapsed.days, 366);
    }

    #[test]
    fn test_difference_antisymmetric_days() {
        let a = DateTime::from(date(2024, 3, 5));
        let b = DateTime::from(date(2021, 11, 30));
        let forward = a.difference(&b);
        let backward = b.difference(&a);
        assert_eq!(forward.days, -backward.days);
        assert_eq!(forward.hours, 0);
        assert_eq!(backward.hours, 0);
    }

    #[test]
    fn test_difference_borrow_keeps_time_non_negative() {
        // Same day, self one hour earlier: borrow yields -1 days, 23 hours
        let elapsed = time(1, 0, 0).difference(&time(2, 0, 0));
        assert_eq!(
            elapsed,
            Elapsed {
                days: -1,
                hours: 23,
                minutes: 0,
                seconds: 0
            }
        );

        let elapsed = time(2, 0, 0).difference(&time(1, 59, 59));
        assert_eq!(
            elapsed,
            Elapsed {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_difference_date_vs_clock() {
        // Mixed kinds share the projection: the clock side contributes no
        // day index, the calendar side no time of day.
        let d = DateTime::from(date(0, 1, 2));
        let t = DateTime::from(time(6, 0, 0));
        let elapsed = d.difference(&t);
        assert_eq!(
            elapsed,
            Elapsed {
                days: 1,
                hours: 18,
                minutes: 0,
                seconds: 0
            }
        );
    }

    #[test]
    fn test_difference_negative_year_linear() {
        // One day either side of the year 0 boundary
        let elapsed = date(0, 1, 1).difference(&date(-1, 12, 31));
        assert_eq!(elapsed.days, 1);

        // Year -1 is not a leap year: 365 days long
        let elapsed = date(0, 1, 1).difference(&date(-1, 1, 1));
        assert_eq!(elapsed.days, 365);

        // Year -4 is a proleptic leap year
        let elapsed = date(-3, 1, 1).difference(&date(-4, 1, 1));
        assert_eq!(elapsed.days, 366);
    }

    #[test]
    fn test_difference_time_components_decompose() {
        let a = time(13, 45, 50);
        let b = time(11, 20, 15);
        let elapsed = a.difference(&b);
        assert_eq!(
            elapsed,
            Elapsed {
                days: 0,
                hours: 2,
                minutes: 25,
                seconds: 35
            }
        );
    }

    #[test]
    fn test_elapsed_display() {
        let elapsed = Elapsed {
            days: 365,
            hours: 0,
            minutes: 0,
            seconds: 0,
        };
        assert_eq!(
            elapsed.to_string(),
            "365 days, 0 hours, 0 minutes, 0 seconds"
        );
    }

    #[test]
    fn test_elapsed_serde() {
        let elapsed = Elapsed {
            days: -1,
            hours: 23,
            minutes: 59,
            seconds: 59,
        };
        let json = serde_json::to_string(&elapsed).unwrap();
        let parsed: Elapsed = serde_json::from_str(&json).unwrap();
        assert_eq!(elapsed, parsed);
    }

    #[test]
    fn test_datetime_display_follows_variant() {
        assert_eq!(DateTime::from(date(2024, 3, 5)).to_string(), "2024-03-05");
        assert_eq!(DateTime::from(time(9, 5, 0)).to_string(), "09:05:00");
    }

    #[test]
    fn test_fields_projection_zeroes_missing_kind() {
        let f = DateTime::from(date(2024, 3, 5)).fields();
        assert_eq!((f.hour, f.minute, f.second), (0, 0, 0));
        assert_eq!((f.year, f.month, f.day), (2024, 3, 5));

        let f = DateTime::from(time(9, 5, 0)).fields();
        assert_eq!((f.year, f.month, f.day), (0, 0, 0));
        assert_eq!((f.hour, f.minute, f.second), (9, 5, 0));
    }
}
