//! Link command: best fuzzy match in list B for every name in list A.
//!
//! CHANGELOG:
//! - 10/17/2026 - Added JSON run summary and parallel matching flag
//! - 10/17/2026 - Initial implementation

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::{ColumnSelector, LinkConfig};
use crate::names::{find_matches, find_matches_par, NameList};
use crate::output::OutputControls;
use crate::table::{read_column, write_matches_to_path, Header, ReadOptions};

/// Input and output files for one run.
#[derive(Debug, Clone)]
pub struct LinkPaths {
    pub file_a: PathBuf,
    pub file_b: PathBuf,
    pub output: PathBuf,
}

/// What a run did, for the status line or `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub file_a: String,
    pub file_b: String,
    pub output: String,
    pub names_a: usize,
    pub names_b: usize,
    pub matches: usize,
    pub threshold: f64,
    pub parallel: bool,
    pub elapsed_ms: f64,
    pub finished_at: String,
}

fn load_names(path: &Path, column: &ColumnSelector, config: &LinkConfig) -> Result<NameList> {
    let options = ReadOptions {
        column: column.clone(),
        has_header: config.has_header,
        delimiter: config.delimiter_byte()?,
    };
    let raw = read_column(path, &options)?;
    let rows = raw.len();
    let names = NameList::from_raw(raw);

    tracing::info!(
        path = %path.display(),
        rows,
        unique = names.len(),
        "loaded names"
    );
    Ok(names)
}

/// Read both lists, match them and write the result file.
pub fn execute(paths: &LinkPaths, config: &LinkConfig) -> Result<RunSummary> {
    config.validate().context("Invalid link configuration")?;
    let start = Instant::now();

    let names_a = load_names(&paths.file_a, &config.column_a, config)?;
    let names_b = load_names(&paths.file_b, &config.column_b, config)?;

    let matches = if config.parallel {
        find_matches_par(&names_a, &names_b, config.threshold)
    } else {
        find_matches(&names_a, &names_b, config.threshold)
    };

    write_matches_to_path(&paths.output, &matches, &Header::default(), config.delimiter_byte()?)?;

    let summary = RunSummary {
        file_a: paths.file_a.display().to_string(),
        file_b: paths.file_b.display().to_string(),
        output: paths.output.display().to_string(),
        names_a: names_a.len(),
        names_b: names_b.len(),
        matches: matches.len(),
        threshold: config.threshold,
        parallel: config.parallel,
        elapsed_ms: start.elapsed().as_secs_f64() * 1000.0,
        finished_at: chrono::Utc::now().to_rfc3339(),
    };

    tracing::info!(
        matches = summary.matches,
        elapsed_ms = summary.elapsed_ms,
        "link run complete"
    );
    Ok(summary)
}

/// Run the link command and report the outcome.
pub fn run(paths: &LinkPaths, config: &LinkConfig, output: &OutputControls) -> Result<()> {
    let summary = execute(paths, config)?;

    if output.json {
        output.print(&summary);
    } else {
        println!(
            "✓ Finished! {} matches written to {}",
            summary.matches, summary.output
        );
    }

    Ok(())
}
