//! Text sink: one `YYYY-MM-DDThh:mm:ssZ` line per record.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::datetime::DateTime;
use crate::error::{Error, Result};

/// Writes records, selected and ordered by a key sequence, as ISO lines.
pub struct IsoWriter<W: Write> {
    inner: W,
}

impl IsoWriter<BufWriter<File>> {
    /// Create (truncate) `path` for writing.
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> IsoWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write `records[k]` for every `k` in `keys`, then flush. Returns lines written.
    pub fn write_keys(&mut self, records: &[DateTime], keys: &[usize]) -> Result<usize> {
        if let Some(&bad) = keys.iter().find(|&&k| k >= records.len()) {
            return Err(Error::PreconditionViolated(format!(
                "key {bad} out of bounds for {} records",
                records.len()
            )));
        }
        for &k in keys {
            writeln!(self.inner, "{}", records[k])?;
        }
        self.inner.flush()?;
        Ok(keys.len())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
