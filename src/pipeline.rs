//! File-to-file distinct pass: ingest, sort, deduplicate, write.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::distinct::distinct_datetimes;
use crate::error::Result;
use crate::ingest::{IngestConfig, ingest_reader};
use crate::output::IsoWriter;

/// Counts reported by [`distinct_file`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub distinct: usize,
}

/// Read date-times from `input` and write the distinct ones, ascending, to `output`.
///
/// `output` is written even when no line was accepted.
pub fn distinct_file(input: &Path, output: &Path, cfg: &IngestConfig) -> Result<Summary> {
    let reader = BufReader::new(File::open(input)?);
    let ingested = ingest_reader(reader, cfg)?;

    let keys = distinct_datetimes(&ingested.records)?;
    let distinct = IsoWriter::create(output)?.write_keys(&ingested.records, &keys)?;

    Ok(Summary {
        lines: ingested.lines,
        accepted: ingested.records.len(),
        rejected: ingested.rejected,
        distinct,
    })
}
