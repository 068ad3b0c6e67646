//! Signed offset-and-wrap arithmetic over bounded fields, and timezone
//! correction chained across the fields of a [`DateTime`].

use std::ops::RangeInclusive;

use crate::datetime::{DAY_RANGE, DateTime, HOUR_RANGE, MINUTE_RANGE, MONTH_RANGE, YEAR_RANGE};
use crate::error::Result;

/// Add `offset` to `value`, wrapping into `range`.
///
/// Returns the wrapped value and the signed number of full range wraps
/// (floor division, so the remainder is never negative). A `value` outside
/// `range` is passed through unchanged with zero carry.
pub fn offset_and_wrap(value: u32, offset: i64, range: RangeInclusive<u32>) -> (u32, i64) {
    if !range.contains(&value) {
        return (value, 0);
    }
    let (min, max) = range.into_inner();
    let width = i64::from(max - min) + 1;
    let shifted = i64::from(value - min) + offset;
    let carry = shifted.div_euclid(width);
    let wrapped = shifted.rem_euclid(width) as u32 + min;
    (wrapped, carry)
}

impl DateTime {
    /// Shift by a signed hour/minute offset, carrying minute -> hour -> day
    /// -> month -> year.
    ///
    /// Days wrap on a fixed 31-day month and years wrap within `0..=9999`.
    /// Fails, leaving `self` unchanged, if the result is invalid (e.g. a field
    /// was already out of range).
    pub fn apply_offset(&mut self, hours: i64, minutes: i64) -> Result<()> {
        let mut next = *self;

        let (minute, carry) = offset_and_wrap(next.minute, minutes, MINUTE_RANGE);
        next.minute = minute;
        let (hour, carry) = offset_and_wrap(next.hour, hours + carry, HOUR_RANGE);
        next.hour = hour;
        let (day, carry) = offset_and_wrap(next.day, carry, DAY_RANGE);
        next.day = day;
        let (month, carry) = offset_and_wrap(next.month, carry, MONTH_RANGE);
        next.month = month;

        // Final carry out of the year is dropped: 9999 wraps to 0000.
        let (year, _) = offset_and_wrap(next.year, carry, YEAR_RANGE);
        next.year = year;

        next.check()?;
        *self = next;
        Ok(())
    }
}
