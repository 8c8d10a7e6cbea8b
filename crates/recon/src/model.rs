use std::collections::BTreeSet;

use num_bigint::BigInt;
use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One claimed identity `a^n + b^n = c^n + d^n = s` from the results file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionRecord {
    /// 1-based line number in the results input.
    pub line: usize,
    #[serde(serialize_with = "ser_int")]
    pub a: BigInt,
    #[serde(serialize_with = "ser_int")]
    pub b: BigInt,
    #[serde(serialize_with = "ser_int")]
    pub c: BigInt,
    #[serde(serialize_with = "ser_int")]
    pub d: BigInt,
    #[serde(serialize_with = "ser_int")]
    pub s: BigInt,
}

impl SolutionRecord {
    pub fn new(
        line: usize,
        a: impl Into<BigInt>,
        b: impl Into<BigInt>,
        c: impl Into<BigInt>,
        d: impl Into<BigInt>,
        s: impl Into<BigInt>,
    ) -> Self {
        Self {
            line,
            a: a.into(),
            b: b.into(),
            c: c.into(),
            d: d.into(),
            s: s.into(),
        }
    }
}

/// Records parsed from the results input, plus lines dropped in skip mode.
#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub records: Vec<SolutionRecord>,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedLine {
    pub line: usize,
    pub content: String,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Sum sets
// ---------------------------------------------------------------------------

/// Set of sums with presence-only semantics and ascending iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SumSet {
    sums: BTreeSet<BigInt>,
}

impl SumSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project the `s` of every record, valid or not.
    pub fn from_records(records: &[SolutionRecord]) -> Self {
        records.iter().map(|r| r.s.clone()).collect()
    }

    pub fn insert(&mut self, sum: BigInt) -> bool {
        self.sums.insert(sum)
    }

    pub fn contains(&self, sum: &BigInt) -> bool {
        self.sums.contains(sum)
    }

    pub fn len(&self) -> usize {
        self.sums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }

    /// Ascending iteration.
    pub fn iter(&self) -> impl Iterator<Item = &BigInt> {
        self.sums.iter()
    }

    /// `self − other`, ascending.
    pub fn difference(&self, other: &SumSet) -> Vec<BigInt> {
        self.sums.difference(&other.sums).cloned().collect()
    }
}

impl FromIterator<BigInt> for SumSet {
    fn from_iter<I: IntoIterator<Item = BigInt>>(iter: I) -> Self {
        Self {
            sums: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ValidationVerdict<'a> {
    pub valid: bool,
    pub record: &'a SolutionRecord,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub exponent: u32,
    pub total: usize,
    pub valid: usize,
    /// Invalid records in input order.
    pub invalid: Vec<SolutionRecord>,
}

impl ValidationReport {
    pub fn all_valid(&self) -> bool {
        self.total == self.valid
    }
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciliationResult {
    /// Distinct sums in the reference enumeration.
    pub known: usize,
    /// Distinct sums in the local results.
    pub found: usize,
    /// In reference, not found. Ascending.
    #[serde(serialize_with = "ser_ints")]
    pub missing: Vec<BigInt>,
    /// Found, not in reference. Ascending.
    #[serde(serialize_with = "ser_ints")]
    pub extra: Vec<BigInt>,
}

impl ReconciliationResult {
    /// True iff the found and reference sets are equal.
    pub fn is_exact(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CheckSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub skipped: usize,
    pub known_sums: usize,
    pub found_sums: usize,
    pub missing: usize,
    pub extra: usize,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckMeta {
    pub exponent: u32,
    pub results: String,
    pub reference: String,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub meta: CheckMeta,
    pub summary: CheckSummary,
    pub validation: ValidationReport,
    pub reconciliation: ReconciliationResult,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedLine>,
}

// Sums routinely exceed 2^53, so JSON carries them as decimal strings.
fn ser_int<S: Serializer>(v: &BigInt, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&v.to_string())
}

fn ser_ints<S: Serializer>(v: &[BigInt], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(v.iter().map(|n| n.to_string()))
}
