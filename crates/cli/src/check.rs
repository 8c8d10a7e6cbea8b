//! `powersum check`: validate a results file and reconcile its sums.

use std::path::{Path, PathBuf};

use clap::Args;
use powersum_recon::engine::complete;
use powersum_recon::model::CheckReport;
use powersum_recon::parse::{load_records, parse_reference};
use powersum_recon::validate::validate_all;
use powersum_recon::{CheckConfig, CheckError};

use crate::exit_codes::{check_exit_code, EXIT_CHECK_INVALID, EXIT_CHECK_MISMATCH, EXIT_ERROR, EXIT_RESULTS, EXIT_USAGE};
use crate::fetch::load_reference;
use crate::report::{render_reconciliation, render_validation, render_verdict, Palette};
use crate::CliError;

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// TOML config file; flags below override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Results file: one `a b c d s` record per line
    #[arg(long, short = 'r')]
    pub results: Option<String>,

    /// Reference enumeration: http(s) URL or local file
    #[arg(long, env = "POWERSUM_REFERENCE")]
    pub reference: Option<String>,

    /// Exponent n used in the identity check
    #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(1..))]
    pub exponent: Option<u32>,

    /// Timeout in seconds for a URL reference (default: wait indefinitely)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Exit nonzero when records are invalid (3) or sums mismatch (4)
    #[arg(long)]
    pub strict: bool,

    /// Skip malformed results lines with a warning instead of aborting
    #[arg(long)]
    pub skip_malformed: bool,

    /// Output JSON to stdout instead of the human report
    #[arg(long)]
    pub json: bool,

    /// Write JSON output to file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

fn check_err(err: CheckError) -> CliError {
    CliError { code: check_exit_code(&err), message: err.to_string(), hint: None }
}

/// Read and parse a config file. Returns the config and the directory its
/// relative paths resolve against.
pub fn read_config(path: &Path) -> Result<(CheckConfig, PathBuf), CliError> {
    let config_str = std::fs::read_to_string(path).map_err(|e| CliError {
        code: EXIT_USAGE,
        message: format!("cannot read config {}: {e}", path.display()),
        hint: None,
    })?;
    let config = CheckConfig::from_toml(&config_str).map_err(check_err)?;
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    Ok((config, base_dir))
}

/// Anchor a relative command-line path at the working directory, so that
/// resolving it against the config file's directory leaves it unchanged.
fn anchor_at_cwd(location: &str) -> Result<String, CliError> {
    let trimmed = location.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") || Path::new(trimmed).is_absolute() {
        return Ok(location.to_string());
    }
    let cwd = std::env::current_dir().map_err(|e| CliError {
        code: EXIT_ERROR,
        message: format!("cannot determine working directory: {e}"),
        hint: None,
    })?;
    Ok(cwd.join(trimmed).display().to_string())
}

/// Merge the config file (if any) with command-line overrides. Paths from
/// the file resolve against its directory, paths from flags against the
/// working directory.
pub fn resolve_config(args: &CheckArgs) -> Result<(CheckConfig, PathBuf), CliError> {
    let (mut config, base_dir) = match &args.config {
        Some(path) => read_config(path)?,
        None => (CheckConfig::default(), PathBuf::from(".")),
    };
    let from_file = args.config.is_some();

    if let Some(ref results) = args.results {
        config.results = if from_file { anchor_at_cwd(results)? } else { results.clone() };
    }
    if let Some(ref reference) = args.reference {
        config.reference = if from_file { anchor_at_cwd(reference)? } else { reference.clone() };
    }
    if let Some(exponent) = args.exponent {
        config.exponent = exponent;
    }
    if let Some(timeout) = args.timeout {
        config.reference_timeout_secs = Some(timeout);
    }
    config.strict |= args.strict;
    config.skip_malformed |= args.skip_malformed;

    config.validate().map_err(check_err)?;
    Ok((config, base_dir))
}

pub fn cmd_check(args: CheckArgs) -> Result<(), CliError> {
    let (config, base_dir) = resolve_config(&args)?;
    let palette = Palette::detect(args.no_color);
    let human = !args.json;

    // Stage 1: records + validation
    let results_path = config.results_path(&base_dir);
    let results_text = std::fs::read_to_string(&results_path).map_err(|e| {
        CliError {
            code: EXIT_RESULTS,
            message: format!("cannot read results {}: {e}", results_path.display()),
            hint: None,
        }
        .with_hint("pass --results or set `results` in the config file")
    })?;
    let loaded = load_records(&results_text, config.skip_malformed).map_err(|e| match e {
        CheckError::MalformedRecord { .. } => {
            check_err(e).with_hint("use --skip-malformed to skip bad lines with a warning")
        }
        other => check_err(other),
    })?;
    log::info!("loaded {} record(s) from {}", loaded.records.len(), results_path.display());

    let validation = validate_all(&loaded.records, config.exponent);
    if human {
        print!("{}", render_validation(&validation, &loaded.skipped, &palette));
    }

    // Stage 2: reference must be complete before reconciliation runs
    let source = config.reference_source(&base_dir);
    let reference_text = load_reference(&source, config.reference_timeout_secs).map_err(check_err)?;
    let reference = parse_reference(&reference_text).map_err(check_err)?;

    let report = complete(&config, &loaded, validation, &reference);
    if human {
        print!("{}", render_reconciliation(&report.reconciliation, &palette));
        print!("{}", render_verdict(&report.summary, &palette));
    }

    write_json(&report, args.json, args.output.as_deref())?;

    strict_outcome(&config, &report)
}

fn write_json(report: &CheckReport, to_stdout: bool, output_file: Option<&Path>) -> Result<(), CliError> {
    if !to_stdout && output_file.is_none() {
        return Ok(());
    }

    let json_str = serde_json::to_string_pretty(report).map_err(|e| CliError {
        code: EXIT_ERROR,
        message: format!("JSON serialization error: {e}"),
        hint: None,
    })?;

    if let Some(path) = output_file {
        std::fs::write(path, &json_str).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("cannot write output: {e}"),
            hint: None,
        })?;
        eprintln!("wrote {}", path.display());
    }

    if to_stdout {
        println!("{json_str}");
    }

    Ok(())
}

/// Report-only unless strict: then invalid records beat sum mismatches.
fn strict_outcome(config: &CheckConfig, report: &CheckReport) -> Result<(), CliError> {
    if !config.strict {
        return Ok(());
    }

    let s = &report.summary;
    if s.invalid > 0 {
        return Err(CliError {
            code: EXIT_CHECK_INVALID,
            message: format!("{} invalid solution(s)", s.invalid),
            hint: None,
        });
    }
    if s.missing > 0 || s.extra > 0 {
        return Err(CliError {
            code: EXIT_CHECK_MISMATCH,
            message: format!("sum mismatch: {} missing, {} extra", s.missing, s.extra),
            hint: None,
        });
    }

    Ok(())
}

/// `powersum validate`: parse and validate a config without running.
pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let (config, base_dir) = read_config(&config_path)?;
    eprintln!(
        "valid: n={}, results {}, reference {}",
        config.exponent,
        config.results_path(&base_dir).display(),
        config.reference_source(&base_dir),
    );
    Ok(())
}
