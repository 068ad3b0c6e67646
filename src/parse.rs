//! Strict parser for `YYYY-MM-DDThh:mm:ss(Z|+hh:mm|-hh:mm)` with optional
//! trailing whitespace.
//!
//! Offset convention: the signed designator is *added* to the written time to
//! obtain the stored value, so `08:03:29+12:30` and `20:33:29Z` are equal.

use std::str::FromStr;

use crate::datetime::{DateTime, HOUR_RANGE, MINUTE_RANGE};
use crate::error::{Error, Result};

/// Timezone designator following the seconds field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TzDesignator {
    /// `Z`
    Utc,
    /// `+hh:mm` / `-hh:mm`, both components carrying the sign.
    Offset { hours: i64, minutes: i64 },
}

/// Parse one ISO-like date-time, applying any signed designator.
pub fn parse_iso(s: &str) -> Result<DateTime> {
    let (mut dt, tzd) = parse_parts(s)?;
    if let TzDesignator::Offset { hours, minutes } = tzd {
        dt.apply_offset(hours, minutes)?;
    }
    dt.check()?;
    Ok(dt)
}

/// Split `s` into the written (unvalidated) fields and its designator.
///
/// Only the grammar and the designator ranges are checked here.
pub fn parse_parts(s: &str) -> Result<(DateTime, TzDesignator)> {
    let mut cur = Cursor::new(s.as_bytes());

    let year = cur.digits(4)?;
    cur.expect(b'-')?;
    let month = cur.digits(2)?;
    cur.expect(b'-')?;
    let day = cur.digits(2)?;
    cur.expect(b'T')?;
    let hour = cur.digits(2)?;
    cur.expect(b':')?;
    let minute = cur.digits(2)?;
    cur.expect(b':')?;
    let second = cur.digits(2)?;

    let tzd = match cur.bump() {
        Some(b'Z') => TzDesignator::Utc,
        Some(sign @ (b'+' | b'-')) => {
            let hours = cur.digits(2)?;
            if !HOUR_RANGE.contains(&hours) {
                return Err(Error::OutOfRangeField {
                    field: "timezone hour",
                    value: hours,
                });
            }
            cur.expect(b':')?;
            let minutes = cur.digits(2)?;
            if !MINUTE_RANGE.contains(&minutes) {
                return Err(Error::OutOfRangeField {
                    field: "timezone minute",
                    value: minutes,
                });
            }
            let sign = if sign == b'-' { -1 } else { 1 };
            TzDesignator::Offset {
                hours: sign * i64::from(hours),
                minutes: sign * i64::from(minutes),
            }
        }
        Some(_) => return Err(Error::malformed(cur.pos - 1, "expected timezone designator")),
        None => return Err(Error::malformed(cur.pos, "missing timezone designator")),
    };

    cur.skip_whitespace();
    cur.finish()?;

    Ok((
        DateTime::new_unchecked(year, month, day, hour, minute, second),
        tzd,
    ))
}

impl FromStr for DateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_iso(s)
    }
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.bytes.get(self.pos).copied()?;
        self.pos += 1;
        Some(b)
    }

    /// Read exactly `n` ASCII digits. NUL counts as a premature terminator.
    fn digits(&mut self, n: usize) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..n {
            match self.bytes.get(self.pos).copied() {
                None | Some(0) => return Err(Error::malformed(self.pos, "unexpected end of input")),
                Some(b @ b'0'..=b'9') => value = value * 10 + u32::from(b - b'0'),
                Some(_) => return Err(Error::malformed(self.pos, "expected digit")),
            }
            self.pos += 1;
        }
        Ok(value)
    }

    fn expect(&mut self, want: u8) -> Result<()> {
        match self.bytes.get(self.pos) {
            Some(&b) if b == want => {
                self.pos += 1;
                Ok(())
            }
            None => Err(Error::malformed(self.pos, "unexpected end of input")),
            Some(_) => Err(Error::malformed(self.pos, "unexpected separator")),
        }
    }

    /// C-locale whitespace: space, \t, \n, \v, \f, \r.
    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r') = self.bytes.get(self.pos) {
            self.pos += 1;
        }
    }

    fn finish(&self) -> Result<()> {
        if self.pos == self.bytes.len() {
            Ok(())
        } else {
            Err(Error::malformed(self.pos, "trailing characters"))
        }
    }
}
