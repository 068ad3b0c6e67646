//! Stable counting sort over an index sequence.
//!
//! Records stay where the caller put them; only `usize` keys addressing them
//! are permuted. Stable via histogram + inclusive prefix sums, scattered in
//! reverse.

use crate::error::{Error, Result};

/// Projects a record onto an unsigned sort key.
///
/// Implemented for any `Fn(&T) -> u32` closure, and for [`crate::Field`].
pub trait KeySelector<T: ?Sized> {
    fn select(&self, record: &T) -> u32;
}

impl<T: ?Sized, F> KeySelector<T> for F
where
    F: Fn(&T) -> u32,
{
    #[inline]
    fn select(&self, record: &T) -> u32 {
        self(record)
    }
}

/// The identity key sequence `0..n`.
pub fn identity_keys(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Stable-sort `keys` ascending by `selector(records[key])` and return the new order.
///
/// Fails with [`Error::InvalidKeyRange`] if any selected value exceeds `max_value`,
/// and with [`Error::PreconditionViolated`] if a key does not address a record.
pub fn counting_sort<T, S>(
    records: &[T],
    keys: &[usize],
    max_value: u32,
    selector: &S,
) -> Result<Vec<usize>>
where
    S: KeySelector<T> + ?Sized,
{
    let mut out = vec![0usize; keys.len()];
    counting_sort_into(records, keys, max_value, selector, &mut out)?;
    Ok(out)
}

/// Like [`counting_sort`], writing into a caller-provided buffer of `keys.len()`.
///
/// `out` is left untouched when an error is returned.
pub fn counting_sort_into<T, S>(
    records: &[T],
    keys: &[usize],
    max_value: u32,
    selector: &S,
    out: &mut [usize],
) -> Result<()>
where
    S: KeySelector<T> + ?Sized,
{
    if out.len() != keys.len() {
        return Err(Error::PreconditionViolated(format!(
            "output buffer holds {} keys, input has {}",
            out.len(),
            keys.len()
        )));
    }

    let mut histogram = vec![0usize; max_value as usize + 1];

    // Count occurrences (and validate everything before the first write)
    for &key in keys {
        let record = records.get(key).ok_or_else(|| {
            Error::PreconditionViolated(format!(
                "key {key} out of bounds for {} records",
                records.len()
            ))
        })?;
        let value = selector.select(record);
        if value > max_value {
            return Err(Error::InvalidKeyRange {
                value,
                max: max_value,
            });
        }
        histogram[value as usize] += 1;
    }

    // Inclusive prefix sums -> end offsets
    for i in 1..histogram.len() {
        histogram[i] += histogram[i - 1];
    }

    // Scatter in reverse so equal values keep their input order
    for &key in keys.iter().rev() {
        let value = selector.select(&records[key]) as usize;
        histogram[value] -= 1;
        out[histogram[value]] = key;
    }

    Ok(())
}
