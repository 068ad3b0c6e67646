use anyhow::Context;
use clap::Parser;
use iso_datetime_radix::{IngestConfig, distinct_file};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Write the distinct ISO-8601 date-times of a file, ascending, in UTC.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input path, one date-time per line
    #[arg(short, long, default_value = "dates.txt")]
    input: PathBuf,

    /// Output path
    #[arg(short, long, default_value = "distinct-dates.txt")]
    output: PathBuf,

    /// Parser threads (rayon)
    #[arg(long)]
    threads: Option<usize>,

    /// Lines parsed per batch
    #[arg(long, default_value_t = 16_384)]
    batch_size: usize,

    /// Parse on the calling thread only
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Log filter, e.g. `info` or `iso_datetime_radix=debug`
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = IngestConfig::default()
        .with_batch_size(args.batch_size)
        .parallel(!args.sequential);
    let cfg = match args.threads {
        Some(n) => cfg.threads(n),
        None => cfg,
    };

    let summary = distinct_file(&args.input, &args.output, &cfg).with_context(|| {
        format!(
            "distinct pass {} -> {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    eprintln!(
        "Wrote {}: lines={}, accepted={}, rejected={}, distinct={}",
        args.output.display(),
        summary.lines,
        summary.accepted,
        summary.rejected,
        summary.distinct
    );

    Ok(())
}
