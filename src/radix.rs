//! LSD radix sort for [`DateTime`] keys built from nine counting-sort passes.
//! Least significant field first; each pass is stable, so the composite order
//! is the full (year, month, day, hour, minute, second) order.

use tracing::debug;

use crate::counting::{counting_sort_into, identity_keys};
use crate::datetime::{DateTime, Field};
use crate::error::Result;

/// Pass order, least significant first.
pub const RADIX_PASSES: [Field; 9] = [
    Field::Second,
    Field::Minute,
    Field::Hour,
    Field::Day,
    Field::Month,
    Field::YearOnes,
    Field::YearTens,
    Field::YearHundreds,
    Field::YearThousands,
];

/// Ascending order of `records` as a permutation of `0..records.len()`.
pub fn sort_datetimes(records: &[DateTime]) -> Result<Vec<usize>> {
    sort_datetimes_keys(records, identity_keys(records.len()))
}

/// Ascending, stable order of the given `keys` into `records`.
///
/// Any failing pass aborts the whole sort.
pub fn sort_datetimes_keys(records: &[DateTime], keys: Vec<usize>) -> Result<Vec<usize>> {
    let n = keys.len();
    if n == 0 {
        return Ok(keys);
    }

    // Scratch buffer; output of each pass becomes the next pass's input.
    let mut keys = keys;
    let mut tmp = vec![0usize; n];

    for field in RADIX_PASSES {
        counting_sort_into(records, &keys, field.max_value(), &field, &mut tmp)?;
        debug!(field = field.name(), records = n, "radix pass");
        std::mem::swap(&mut keys, &mut tmp);
    }

    Ok(keys)
}
