//! platecsv CLI - Convert plate reader kinetics exports to CSV
//!
//! ```bash
//! platecsv run01.txt                      # writes run01.csv
//! platecsv -i run01.txt -i run02.txt      # batch, one .csv per input
//! platecsv run01.txt -o readings.csv      # explicit destination
//! platecsv -vv run01.txt                  # parsing diagnostics
//! ```
//!
//! One failing file never aborts the batch; the process exits non-zero if
//! any file failed.

use clap::{ArgAction, Parser};
use platecsv::logs::{self, log_success};
use platecsv::{convert_file, PipelineError};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "platecsv")]
#[command(about = "Convert Molecular Devices plate reader kinetics exports to CSV", long_about = None)]
struct Cli {
    /// Input text files exported by the plate reader
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Input files (may be given instead of, or mixed with, positional inputs)
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    named_inputs: Vec<PathBuf>,

    /// Output CSV files, one per input (default: input with a .csv extension)
    #[arg(short, long, value_name = "FILE")]
    output: Vec<PathBuf>,

    /// Print per-file progress (-vv for parsing diagnostics)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Same as -vv
    #[arg(long)]
    veryverbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let verbosity = if cli.veryverbose { 2 } else { cli.verbose };
    logs::set_verbosity(verbosity);

    let mut inputs = cli.inputs;
    inputs.extend(cli.named_inputs);

    if inputs.is_empty() {
        eprintln!("❌ Error: no input files given");
        process::exit(1);
    }

    if !cli.output.is_empty() && cli.output.len() != inputs.len() {
        eprintln!(
            "❌ Error: {} input file(s) but {} output name(s)",
            inputs.len(),
            cli.output.len()
        );
        process::exit(1);
    }

    let mut converted = 0usize;
    let mut failed = 0usize;

    for (index, input) in inputs.iter().enumerate() {
        let dest = cli
            .output
            .get(index)
            .cloned()
            .unwrap_or_else(|| default_output_path(input));

        if !input.exists() {
            eprintln!("❌ {}: file does not exist", input.display());
            failed += 1;
            continue;
        }

        match convert_file(input, &dest) {
            Ok(report) => {
                log_success(format!(
                    "{} → {} ({} rows, {} series)",
                    input.display(),
                    dest.display(),
                    report.rows_written,
                    report.source.series_count
                ));
                converted += 1;
            }
            Err(error) => {
                report_failure(input, &error);
                failed += 1;
            }
        }
    }

    eprintln!("✨ Converted {} of {} file(s)", converted, inputs.len());

    if failed > 0 {
        process::exit(1);
    }
}

/// Default destination: the input path with its extension replaced by `.csv`.
fn default_output_path(input: &Path) -> PathBuf {
    let mut path = input.to_path_buf();
    path.set_extension("csv");
    path
}

fn report_failure(input: &Path, error: &PipelineError) {
    eprintln!("❌ {}: {}", input.display(), error);
}
