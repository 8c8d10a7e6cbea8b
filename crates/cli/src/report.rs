//! Human-readable check report.
//!
//! Rendering returns strings so the exact report text is testable; colour is
//! applied through a [`Palette`] that is a no-op when disabled.

use std::fmt::Write;

use crossterm::style::Stylize;
use powersum_recon::model::{CheckSummary, ReconciliationResult, SkippedLine, ValidationReport};
use powersum_recon::validate::describe;

#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Colour only when stdout is a terminal and the user did not opt out.
    pub fn detect(no_color: bool) -> Self {
        Self::new(!no_color && atty::is(atty::Stream::Stdout))
    }

    fn red(&self, s: &str) -> String {
        if self.enabled { s.red().to_string() } else { s.to_string() }
    }

    fn green(&self, s: &str) -> String {
        if self.enabled { s.green().to_string() } else { s.to_string() }
    }

    fn yellow(&self, s: &str) -> String {
        if self.enabled { s.yellow().to_string() } else { s.to_string() }
    }

    fn bold(&self, s: &str) -> String {
        if self.enabled { s.bold().to_string() } else { s.to_string() }
    }
}

/// Validation stage: invalid records in input order, then the tally.
pub fn render_validation(validation: &ValidationReport, skipped: &[SkippedLine], palette: &Palette) -> String {
    let mut out = String::new();
    let n = validation.exponent;

    let _ = writeln!(out, "{}", palette.bold("Validating solutions"));
    for record in &validation.invalid {
        let line = format!("INVALID SOLUTION: {}", describe(record, n));
        let _ = writeln!(out, "{}", palette.red(&line));
    }

    if !skipped.is_empty() {
        let line = format!("Skipped {} malformed line(s) in results.", skipped.len());
        let _ = writeln!(out, "{}", palette.yellow(&line));
    }

    let tally = format!(
        "Checked {} total solutions, found {} valid solutions.",
        validation.total, validation.valid
    );
    let tally = if validation.all_valid() { palette.green(&tally) } else { palette.red(&tally) };
    let _ = writeln!(out, "{tally}");

    out
}

/// Reconciliation stage: set sizes, then missing and extra sums ascending.
pub fn render_reconciliation(recon: &ReconciliationResult, palette: &Palette) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", palette.bold("Checking against known solutions"));
    let _ = writeln!(out, "Known solutions: {}", recon.known);
    let _ = writeln!(out, "Found solutions: {}", recon.found);

    if !recon.missing.is_empty() {
        let _ = writeln!(out, "{} solutions in known but not found:", recon.missing.len());
        for sum in &recon.missing {
            let _ = writeln!(out, "  Missing: {sum}");
        }
    }

    if !recon.extra.is_empty() {
        let _ = writeln!(out, "{} solutions in found but not in known:", recon.extra.len());
        for sum in &recon.extra {
            let _ = writeln!(out, "  Extra: {sum}");
        }
    }

    out
}

/// Overall verdict: both stages clean, or the counts that failed.
pub fn render_verdict(summary: &CheckSummary, palette: &Palette) -> String {
    if summary.passed {
        return format!("{}\n", palette.green("Result: PASS"));
    }
    let line = format!(
        "Result: FAIL ({} invalid, {} missing, {} extra)",
        summary.invalid, summary.missing, summary.extra
    );
    format!("{}\n", palette.red(&line))
}
