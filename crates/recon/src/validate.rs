use num_bigint::BigInt;
use num_traits::Pow;

use crate::model::{SolutionRecord, ValidationReport, ValidationVerdict};

fn power(base: &BigInt, n: u32) -> BigInt {
    Pow::pow(base, n)
}

/// True iff `a^n + b^n == s` and `c^n + d^n == s`, in exact arithmetic.
pub fn validate(record: &SolutionRecord, n: u32) -> bool {
    let left = power(&record.a, n) + power(&record.b, n);
    if left != record.s {
        return false;
    }
    power(&record.c, n) + power(&record.d, n) == record.s
}

/// Per-record verdicts in input order.
pub fn verdicts(records: &[SolutionRecord], n: u32) -> impl Iterator<Item = ValidationVerdict<'_>> {
    records.iter().map(move |record| ValidationVerdict {
        valid: validate(record, n),
        record,
    })
}

/// Validate every record once. Invalid records keep their input order.
pub fn validate_all(records: &[SolutionRecord], n: u32) -> ValidationReport {
    let mut valid = 0;
    let mut invalid = Vec::new();

    for verdict in verdicts(records, n) {
        if verdict.valid {
            valid += 1;
        } else {
            log::debug!("line {}: identity fails for n={n}", verdict.record.line);
            invalid.push(verdict.record.clone());
        }
    }

    ValidationReport {
        exponent: n,
        total: records.len(),
        valid,
        invalid,
    }
}

/// Human form of the claimed identity: `a^n + b^n = c^n + d^n = s`.
pub fn describe(record: &SolutionRecord, n: u32) -> String {
    format!(
        "{a}^{n} + {b}^{n} = {c}^{n} + {d}^{n} = {s}",
        a = record.a,
        b = record.b,
        c = record.c,
        d = record.d,
        s = record.s,
    )
}
