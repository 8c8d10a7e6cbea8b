use crate::model::{ReconciliationResult, SumSet};

/// Compare found sums against the reference enumeration.
///
/// `missing = reference − found`, `extra = found − reference`, both ascending.
/// An empty reference is reconciled like any other set, so every found sum
/// comes back as extra.
pub fn reconcile(found: &SumSet, reference: &SumSet) -> ReconciliationResult {
    ReconciliationResult {
        known: reference.len(),
        found: found.len(),
        missing: reference.difference(found),
        extra: found.difference(reference),
    }
}
