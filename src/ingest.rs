//! Line ingestion: synchronous (rayon) and asynchronous (tokio) front ends.
//! Lines are parsed in batches; malformed lines are counted and skipped.

use std::io::BufRead;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::datetime::DateTime;
use crate::error::Result;
use crate::parse::parse_iso;

/// Ingestion configuration.
#[derive(Clone, Debug)]
pub struct IngestConfig {
    batch_size: usize,
    threads: Option<usize>,
    parallel: bool,
    #[cfg_attr(not(feature = "async"), allow(dead_code))]
    async_buf_size: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            batch_size: 16_384,
            threads: None,
            parallel: true,
            async_buf_size: 64 * 1024,
        }
    }
}

impl IngestConfig {
    /// Lines parsed per batch (min 1).
    pub fn with_batch_size(mut self, n: usize) -> Self {
        self.batch_size = n.max(1);
        self
    }
    /// Fix the number of rayon threads used for parsing.
    ///
    /// Sync ingestion only; `ingest_async` parses on the global pool.
    pub fn threads(mut self, n: usize) -> Self {
        self.threads = Some(n);
        self
    }
    /// Parse batches on rayon (default: true).
    pub fn parallel(mut self, yes: bool) -> Self {
        self.parallel = yes;
        self
    }
    /// Async batch size (lines per batch).
    pub fn async_buf_size(mut self, n: usize) -> Self {
        self.async_buf_size = n.max(1);
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

/// Records accepted from a line source, in input order.
#[derive(Clone, Debug, Default)]
pub struct Ingested {
    pub records: Vec<DateTime>,
    /// Lines seen, accepted or not.
    pub lines: usize,
    /// Lines that failed to parse.
    pub rejected: usize,
}

/// Parse every line of `lines`.
pub fn ingest_lines<I, S>(lines: I, cfg: &IngestConfig) -> Ingested
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Sync,
{
    let mut ing = Ingestor::new(cfg);
    let mut block: Vec<S> = Vec::with_capacity(cfg.batch_size);
    for line in lines {
        block.push(line);
        if block.len() == cfg.batch_size {
            ing.push_block(&block);
            block.clear();
        }
    }
    ing.push_block(&block);
    ing.finish()
}

/// Parse every line read from `reader`. I/O errors abort; parse errors do not.
pub fn ingest_reader<R: BufRead>(reader: R, cfg: &IngestConfig) -> Result<Ingested> {
    let mut ing = Ingestor::new(cfg);
    let mut lines = reader.lines();
    loop {
        let mut block: Vec<String> = Vec::with_capacity(cfg.batch_size);
        for line in (&mut lines).take(cfg.batch_size) {
            block.push(line?);
        }
        if block.is_empty() {
            break;
        }
        ing.push_block(&block);
    }
    Ok(ing.finish())
}

/// Async variant of [`ingest_reader`]; batches are parsed on the blocking pool.
#[cfg(feature = "async")]
pub async fn ingest_async<R>(reader: R, cfg: &IngestConfig) -> Result<Ingested>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    use tokio::io::AsyncBufReadExt;

    let mut ing = Ingestor::new(cfg);
    let mut lines = reader.lines();
    loop {
        let mut batch: Vec<String> = Vec::with_capacity(cfg.async_buf_size.min(16_384));
        while batch.len() < cfg.async_buf_size {
            match lines.next_line().await? {
                Some(line) => batch.push(line),
                None => break,
            }
        }
        if batch.is_empty() {
            break;
        }
        let parallel = cfg.parallel;
        let parsed = tokio::task::spawn_blocking(move || parse_block(&batch, parallel))
            .await
            .map_err(std::io::Error::other)?;
        ing.absorb(parsed);
    }
    Ok(ing.finish())
}

fn strip_eol(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

fn parse_block<S: AsRef<str> + Sync>(block: &[S], parallel: bool) -> Vec<Result<DateTime>> {
    if parallel {
        block
            .par_iter()
            .map(|line| parse_iso(strip_eol(line.as_ref())))
            .collect()
    } else {
        block
            .iter()
            .map(|line| parse_iso(strip_eol(line.as_ref())))
            .collect()
    }
}

struct Ingestor {
    parallel: bool,
    pool: Option<rayon::ThreadPool>,
    out: Ingested,
}

impl Ingestor {
    fn new(cfg: &IngestConfig) -> Self {
        let pool = match cfg.threads {
            Some(n) if cfg.parallel => {
                match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                    Ok(pool) => Some(pool),
                    Err(e) => {
                        warn!(threads = n, error = %e, "falling back to the global rayon pool");
                        None
                    }
                }
            }
            _ => None,
        };
        Self {
            parallel: cfg.parallel,
            pool,
            out: Ingested::default(),
        }
    }

    fn push_block<S: AsRef<str> + Sync>(&mut self, block: &[S]) {
        if block.is_empty() {
            return;
        }
        let parallel = self.parallel;
        let parsed = match &self.pool {
            Some(pool) => pool.install(|| parse_block(block, parallel)),
            None => parse_block(block, parallel),
        };
        self.absorb(parsed);
    }

    fn absorb(&mut self, parsed: Vec<Result<DateTime>>) {
        for item in parsed {
            self.out.lines += 1;
            match item {
                Ok(dt) => self.out.records.push(dt),
                Err(e) => {
                    self.out.rejected += 1;
                    debug!(line = self.out.lines, error = %e, "skipping line");
                }
            }
        }
    }

    fn finish(self) -> Ingested {
        info!(
            lines = self.out.lines,
            accepted = self.out.records.len(),
            rejected = self.out.rejected,
            "ingestion done"
        );
        self.out
    }
}
