use crate::model::{CheckSummary, ReconciliationResult, ValidationReport};

/// Compute summary statistics from both stages.
pub fn compute_summary(
    validation: &ValidationReport,
    reconciliation: &ReconciliationResult,
    skipped: usize,
) -> CheckSummary {
    CheckSummary {
        total: validation.total,
        valid: validation.valid,
        invalid: validation.total - validation.valid,
        skipped,
        known_sums: reconciliation.known,
        found_sums: reconciliation.found,
        missing: reconciliation.missing.len(),
        extra: reconciliation.extra.len(),
        passed: validation.all_valid() && reconciliation.is_exact(),
    }
}
