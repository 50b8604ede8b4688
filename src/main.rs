//! wolfies-namematch - Fast Rust CLI for fuzzy name linkage
//!
//! Reads one name column from each of two CSV files and writes the best
//! Jaro-Winkler match in file B for every name in file A.
//!
//! CHANGELOG:
//! - 10/17/2026 - Added score/normalize diagnostics
//! - 10/17/2026 - Initial CLI skeleton

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use wolfies_namematch::commands;
use wolfies_namematch::commands::link::LinkPaths;
use wolfies_namematch::config::{ColumnSelector, LinkConfig, DEFAULT_THRESHOLD};
use wolfies_namematch::output;

/// Fast Rust CLI for fuzzy name linkage between two CSV lists.
#[derive(Parser, Debug)]
#[command(name = "wolfies-namematch")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Compact JSON output (no whitespace)
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Match every name in FILE_A to its best fuzzy match in FILE_B
    Link {
        /// CSV file with the A-side names
        file_a: PathBuf,

        /// CSV file with the B-side names
        file_b: PathBuf,

        /// Where to write the matches CSV
        output: PathBuf,

        /// Minimum similarity to accept a pair (0-1, inclusive)
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, env = "NAMEMATCH_THRESHOLD")]
        threshold: f64,

        /// Name column: 0-based index or header name
        #[arg(short, long, default_value = "0")]
        column: ColumnSelector,

        /// Name column in FILE_B, if different from --column
        #[arg(long)]
        column_b: Option<ColumnSelector>,

        /// Inputs have no header row
        #[arg(long)]
        no_header: bool,

        /// Field delimiter for inputs and output
        #[arg(short, long, default_value_t = ',')]
        delimiter: char,

        /// Spread the comparison over all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Score two names the way link would
    Score {
        /// First name
        a: String,

        /// Second name
        b: String,

        /// Threshold to compare against
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD, env = "NAMEMATCH_THRESHOLD")]
        threshold: f64,
    },

    /// Show the normalized form of a name
    Normalize {
        /// Text to normalize
        text: Vec<String>,
    },
}

fn main() -> ExitCode {
    // Initialize tracing/logging (stderr keeps stdout clean for --json)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let output_controls = output::OutputControls {
        json: cli.json,
        compact: cli.compact,
    };

    let result = match cli.command {
        Command::Link {
            file_a,
            file_b,
            output,
            threshold,
            column,
            column_b,
            no_header,
            delimiter,
            parallel,
        } => {
            let paths = LinkPaths { file_a, file_b, output };
            let config = LinkConfig {
                threshold,
                column_b: column_b.unwrap_or_else(|| column.clone()),
                column_a: column,
                has_header: !no_header,
                delimiter,
                parallel,
            };
            commands::link::run(&paths, &config, &output_controls)
        }
        Command::Score { a, b, threshold } => {
            commands::inspect::score(&a, &b, threshold, &output_controls)
        }
        Command::Normalize { text } => {
            commands::inspect::normalize_text(&text.join(" "), &output_controls)
        }
    };

    match result {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            if cli.json {
                println!("{}", output::format_error(&format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::from(1)
        }
    }
}
