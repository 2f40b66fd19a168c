use crate::cli::EngineArgs;
use crate::infra::{build_engine, load_cli_config};
use clap::Args;
use retirement_engine::error::AppError;
use retirement_engine::simulation::{read_requests, write_summary_csv, RetirementEngine};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// JSON file holding an array of simulation requests
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// CSV destination (defaults to stdout)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) engine: EngineArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BatchTotals {
    pub(crate) evaluated: usize,
    pub(crate) eligible: usize,
    pub(crate) rejected: usize,
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let config = load_cli_config(args.engine.day_count_policy)?;
    let engine = build_engine(&config);
    let reader = BufReader::new(File::open(&args.input)?);

    let totals = match &args.output {
        Some(path) => export_batch(&engine, reader, File::create(path)?)?,
        None => export_batch(&engine, reader, io::stdout().lock())?,
    };

    info!(
        evaluated = totals.evaluated,
        eligible = totals.eligible,
        rejected = totals.rejected,
        "batch export finished"
    );
    Ok(())
}

pub(crate) fn export_batch<R: Read, W: Write>(
    engine: &RetirementEngine,
    reader: R,
    writer: W,
) -> Result<BatchTotals, AppError> {
    let requests = read_requests(reader)?;
    let entries = engine.evaluate_batch(requests);
    write_summary_csv(&entries, writer)?;

    let rejected = entries.iter().filter(|entry| entry.error.is_some()).count();
    let eligible = entries
        .iter()
        .filter_map(|entry| entry.outcome.as_ref())
        .filter(|outcome| outcome.eligible)
        .count();

    Ok(BatchTotals {
        evaluated: entries.len(),
        eligible,
        rejected,
    })
}
