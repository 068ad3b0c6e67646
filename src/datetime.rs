//! Fixed-field UTC date-time record and its radix key selectors.
//!
//! Conventions
//! - Only per-field ranges are checked; calendar correctness (e.g. Feb 30) is not.
//! - Ordering is lexicographic over (year, month, day, hour, minute, second).

use std::fmt;
use std::ops::RangeInclusive;

use crate::counting::KeySelector;
use crate::error::{Error, Result};

pub const YEAR_RANGE: RangeInclusive<u32> = 0..=9999;
pub const MONTH_RANGE: RangeInclusive<u32> = 1..=12;
pub const DAY_RANGE: RangeInclusive<u32> = 1..=31;
pub const HOUR_RANGE: RangeInclusive<u32> = 0..=23;
pub const MINUTE_RANGE: RangeInclusive<u32> = 0..=59;
pub const SECOND_RANGE: RangeInclusive<u32> = 0..=59;

/// A date-time normalized to UTC, second precision.
///
/// Field order matters: the derived `Ord` is the lexicographic order used to
/// verify radix-sort output.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    pub(crate) year: u32,
    pub(crate) month: u32,
    pub(crate) day: u32,
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
}

impl DateTime {
    /// Build a record, failing with [`Error::OutOfRangeField`] on the first bad field.
    pub fn new(year: u32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<Self> {
        let dt = Self::new_unchecked(year, month, day, hour, minute, second);
        dt.check()?;
        Ok(dt)
    }

    /// Build a record without range checks. [`DateTime::is_valid`] may be false.
    pub const fn new_unchecked(
        year: u32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// True iff every field lies within its range.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    pub(crate) fn check(&self) -> Result<()> {
        let fields = [
            ("year", self.year, YEAR_RANGE),
            ("month", self.month, MONTH_RANGE),
            ("day", self.day, DAY_RANGE),
            ("hour", self.hour, HOUR_RANGE),
            ("minute", self.minute, MINUTE_RANGE),
            ("second", self.second, SECOND_RANGE),
        ];
        for (field, value, range) in fields {
            if !range.contains(&value) {
                return Err(Error::OutOfRangeField { field, value });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn year(&self) -> u32 {
        self.year
    }
    #[inline]
    pub fn month(&self) -> u32 {
        self.month
    }
    #[inline]
    pub fn day(&self) -> u32 {
        self.day
    }
    #[inline]
    pub fn hour(&self) -> u32 {
        self.hour
    }
    #[inline]
    pub fn minute(&self) -> u32 {
        self.minute
    }
    #[inline]
    pub fn second(&self) -> u32 {
        self.second
    }

    /// Base-10 digit `place` of the year (0 = ones .. 3 = thousands).
    /// Places past the width of `u32` are 0.
    #[inline]
    pub fn year_digit(&self, place: u32) -> u32 {
        match 10u32.checked_pow(place) {
            Some(scale) => (self.year / scale) % 10,
            None => 0,
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// One radix key of a [`DateTime`]: a whole field, or one decimal digit of the year.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    YearOnes,
    YearTens,
    YearHundreds,
    YearThousands,
}

impl Field {
    /// Largest value this key can take on a valid record (histogram bound).
    pub const fn max_value(self) -> u32 {
        match self {
            Field::Second | Field::Minute => 59,
            Field::Hour => 23,
            Field::Day => 31,
            Field::Month => 12,
            Field::YearOnes | Field::YearTens | Field::YearHundreds | Field::YearThousands => 9,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Second => "second",
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::Day => "day",
            Field::Month => "month",
            Field::YearOnes => "year-ones",
            Field::YearTens => "year-tens",
            Field::YearHundreds => "year-hundreds",
            Field::YearThousands => "year-thousands",
        }
    }

    /// Project `dt` onto this key.
    #[inline]
    pub fn value_of(self, dt: &DateTime) -> u32 {
        match self {
            Field::Second => dt.second,
            Field::Minute => dt.minute,
            Field::Hour => dt.hour,
            Field::Day => dt.day,
            Field::Month => dt.month,
            Field::YearOnes => dt.year_digit(0),
            Field::YearTens => dt.year_digit(1),
            Field::YearHundreds => dt.year_digit(2),
            // Not reduced mod 10, so a year above 9999 exceeds `max_value`.
            Field::YearThousands => dt.year / 1000,
        }
    }
}

impl KeySelector<DateTime> for Field {
    #[inline]
    fn select(&self, record: &DateTime) -> u32 {
        self.value_of(record)
    }
}
