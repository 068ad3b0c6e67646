//! Duplicate elimination over radix-sorted keys.
//!
//! Output follows sort order, not input order: the survivor of each group of
//! equal records is the first one in sort order.

use tracing::info;

use crate::datetime::DateTime;
use crate::error::{Error, Result};
use crate::radix::sort_datetimes;

/// Sort `records` and keep one key per distinct value, ascending.
pub fn distinct_datetimes(records: &[DateTime]) -> Result<Vec<usize>> {
    let sorted = sort_datetimes(records)?;
    let unique = distinct_sorted(records, &sorted)?;
    info!(
        records = records.len(),
        distinct = unique.len(),
        "distinct extraction done"
    );
    Ok(unique)
}

/// Drop every key whose record equals the previously retained one.
///
/// `sorted` must already be in ascending order (e.g. from [`crate::sort_datetimes`]);
/// equal records are then adjacent and a single scan suffices.
pub fn distinct_sorted(records: &[DateTime], sorted: &[usize]) -> Result<Vec<usize>> {
    let mut out: Vec<usize> = Vec::with_capacity(sorted.len());
    let mut prev: Option<&DateTime> = None;
    for &key in sorted {
        let cur = records.get(key).ok_or_else(|| {
            Error::PreconditionViolated(format!(
                "key {key} out of bounds for {} records",
                records.len()
            ))
        })?;
        if prev == Some(cur) {
            continue;
        }
        out.push(key);
        prev = Some(cur);
    }
    Ok(out)
}
