//! Command line interface for the disequa validation engine.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use disequa_core::{validate, PuzzleSet};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "disequa",
    version,
    about = "Validate linear-inequality answers against reference solutions"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check a candidate answer against a reference solution
    Check {
        /// The submitted answer, e.g. "x > 4" or "(4, ∞)"
        candidate: String,

        /// The reference solution
        reference: String,

        /// Print the full result as JSON instead of the feedback line
        #[arg(long)]
        json: bool,
    },

    /// Load a puzzle-set file (YAML or JSON) and report whether it is valid
    Puzzles {
        /// Path to the puzzle-set file
        file: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            candidate,
            reference,
            json,
        } => {
            let result = validate(&candidate, &reference);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.feedback);
            }

            Ok(if result.correct {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }

        Command::Puzzles { file } => {
            let set = load_puzzle_set(&file)
                .with_context(|| format!("invalid puzzle set: {}", file.display()))?;

            println!("{}: {} puzzle(s) ok", file.display(), set.len());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_puzzle_set(path: &Path) -> Result<PuzzleSet> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    let set = match extension {
        "yaml" | "yml" => PuzzleSet::from_yaml_file(path)?,
        "json" => PuzzleSet::from_json_file(path)?,
        other => bail!("unsupported puzzle file extension: {other:?} (expected yaml or json)"),
    };

    Ok(set)
}
