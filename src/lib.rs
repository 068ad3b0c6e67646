//! Deterministic sorting and deduplication of ISO-8601 date-times.
//!
//! - Generic stable counting sort over index sequences ([`counting_sort`])
//! - Nine-pass LSD radix sort over [`DateTime`] fields ([`sort_datetimes`])
//! - Strict `YYYY-MM-DDThh:mm:ss(Z|±hh:mm)` parser with carry-propagating offsets
//! - Linear distinct extraction over the sorted order ([`distinct_datetimes`])
//! - Batched line ingestion (rayon; tokio behind `async`) and an ISO line writer
//!
//! Sorting never moves records: every operation takes `&[T]` and permutes
//! `usize` keys into it.

mod counting;
mod datetime;
mod distinct;
mod error;
mod ingest;
mod output;
mod parse;
mod pipeline;
mod radix;
mod wrap;

pub use counting::{KeySelector, counting_sort, counting_sort_into, identity_keys};
pub use datetime::{
    DAY_RANGE, DateTime, Field, HOUR_RANGE, MINUTE_RANGE, MONTH_RANGE, SECOND_RANGE, YEAR_RANGE,
};
pub use distinct::{distinct_datetimes, distinct_sorted};
pub use error::{Error, Result};
#[cfg(feature = "async")]
pub use ingest::ingest_async;
pub use ingest::{IngestConfig, Ingested, ingest_lines, ingest_reader};
pub use output::IsoWriter;
pub use parse::{TzDesignator, parse_iso, parse_parts};
pub use pipeline::{Summary, distinct_file};
pub use radix::{RADIX_PASSES, sort_datetimes, sort_datetimes_keys};
pub use wrap::offset_and_wrap;
