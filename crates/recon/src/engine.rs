use crate::config::CheckConfig;
use crate::error::CheckError;
use crate::evidence::compute_summary;
use crate::model::{CheckMeta, CheckReport, LoadedRecords, SumSet, ValidationReport};
use crate::parse::{load_records, parse_reference};
use crate::reconcile::reconcile;
use crate::validate::validate_all;

/// Run both stages over the same records.
///
/// Validation never filters: invalid records still contribute their sum to
/// the found set.
pub fn run(config: &CheckConfig, loaded: &LoadedRecords, reference: &SumSet) -> CheckReport {
    let validation = validate_all(&loaded.records, config.exponent);
    complete(config, loaded, validation, reference)
}

/// Reconcile and assemble the report for an already-validated record set.
///
/// Lets a caller show the validation stage before the reference has been
/// retrieved.
pub fn complete(
    config: &CheckConfig,
    loaded: &LoadedRecords,
    validation: ValidationReport,
    reference: &SumSet,
) -> CheckReport {
    let found = SumSet::from_records(&loaded.records);
    if reference.is_empty() && !found.is_empty() {
        log::warn!("reference set is empty; all {} found sums will be reported as extra", found.len());
    }
    let reconciliation = reconcile(&found, reference);

    let summary = compute_summary(&validation, &reconciliation, loaded.skipped.len());

    CheckReport {
        meta: CheckMeta {
            exponent: config.exponent,
            results: config.results.clone(),
            reference: config.reference.clone(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        validation,
        reconciliation,
        skipped: loaded.skipped.clone(),
    }
}

/// Parse both inputs and run. The reference text must already be retrieved;
/// a parse failure aborts before any reconciliation happens.
pub fn run_texts(
    config: &CheckConfig,
    results_text: &str,
    reference_text: &str,
) -> Result<CheckReport, CheckError> {
    let loaded = load_records(results_text, config.skip_malformed)?;
    let reference = parse_reference(reference_text)?;
    Ok(run(config, &loaded, &reference))
}
