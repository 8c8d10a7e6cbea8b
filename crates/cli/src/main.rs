// powersum CLI - checks equal-sums-of-powers solution sets

mod check;
mod exit_codes;
mod fetch;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use check::CheckArgs;
use exit_codes::{EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "powersum")]
#[command(about = "Validate a^n + b^n = c^n + d^n = s solutions and reconcile them against a reference enumeration")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every record, then reconcile found sums against the reference
    #[command(after_help = "\
Examples:
  powersum check
  powersum check --results results.txt --exponent 4
  powersum check --reference b018786.txt --strict
  powersum check --config check.toml --json --output report.json")]
    Check(CheckArgs),

    /// Validate a check config without running
    #[command(after_help = "\
Examples:
  powersum validate check.toml")]
    Validate {
        /// Path to the TOML config file
        config: PathBuf,
    },
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn args(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

fn init_logging() {
    // `log` records from the engine are bridged by the fmt subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        None => Err(CliError::args("no command given").with_hint("run `powersum check` or `powersum --help`")),
        Some(Commands::Check(args)) => check::cmd_check(args),
        Some(Commands::Validate { config }) => check::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = e.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(e.code)
        }
    }
}
