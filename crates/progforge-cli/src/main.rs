#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use progforge_store::{export_snapshot, load_programme, StoreError};
use progforge_validate::{completion_percent, validate_programme, Severity};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;
use tracing::{debug, info};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
enum ExitCode {
    Success = 0,
    Validation = 3,
    Internal = 10,
}

#[derive(Parser)]
#[command(name = "progforge")]
#[command(about = "Programme definition validation and export CLI")]
struct Cli {
    /// Emit machine-readable JSON instead of the human table.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    /// Suppress non-essential output.
    #[arg(long, global = true, default_value_t = false)]
    quiet: bool,
    /// Enable trace-level diagnostics on stderr.
    #[arg(long, global = true, default_value_t = false)]
    trace: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print validation flags and the completion score for a programme file.
    Validate { file: PathBuf },
    /// Print the completion percentage for a programme file.
    Completion { file: PathBuf },
    /// Export a snapshot bundle (programme + flags + completion) as JSON.
    Export {
        file: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Export even when the programme is below 100% completion.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> ProcessExitCode {
    let cli = Cli::parse();
    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let code = match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            match err {
                StoreError::ExportGate { .. } => ExitCode::Validation,
                _ => ExitCode::Internal,
            }
        }
    };
    ProcessExitCode::from(code as u8)
}

fn run(cli: &Cli) -> Result<ExitCode, StoreError> {
    match &cli.command {
        Commands::Validate { file } => {
            let programme = load_programme(file)?;
            let flags = validate_programme(&programme);
            let completion = completion_percent(&programme);
            info!(
                path = %file.display(),
                flags = flags.len(),
                completion,
                "validated programme"
            );
            if cli.json {
                let payload = json!({
                    "flags": &flags,
                    "completionPercent": completion,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else if !cli.quiet {
                for flag in &flags {
                    println!("{:5} [{}] {}", flag.severity.as_str(), flag.step, flag.message);
                }
                println!("completion: {completion}%");
            }
            let has_errors = flags.iter().any(|f| f.severity == Severity::Error);
            Ok(if has_errors {
                ExitCode::Validation
            } else {
                ExitCode::Success
            })
        }
        Commands::Completion { file } => {
            let programme = load_programme(file)?;
            let completion = completion_percent(&programme);
            debug!(path = %file.display(), completion, "scored programme");
            if cli.json {
                println!("{}", json!({ "completionPercent": completion }));
            } else {
                println!("{completion}");
            }
            Ok(ExitCode::Success)
        }
        Commands::Export { file, out, force } => {
            let programme = load_programme(file)?;
            debug!(path = %file.display(), out = %out.display(), force, "exporting snapshot");
            let snapshot = export_snapshot(out, &programme, *force)?;
            if cli.json {
                let payload = json!({
                    "out": out,
                    "completionPercent": snapshot.completion_percent,
                    "flagCount": snapshot.flags.len(),
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else if !cli.quiet {
                println!(
                    "exported snapshot to {} (completion {}%, {} flags)",
                    out.display(),
                    snapshot.completion_percent,
                    snapshot.flags.len()
                );
            }
            Ok(ExitCode::Success)
        }
    }
}
