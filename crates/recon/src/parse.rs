//! Text formats consumed by the checker.
//!
//! Results: one record per line, `a b c d s`, whitespace separated.
//! Reference: whitespace-separated columns, the sum is the second field
//! (`index value` in OEIS b-file layout).

use num_bigint::BigInt;

use crate::error::CheckError;
use crate::model::{LoadedRecords, SkippedLine, SolutionRecord, SumSet};

/// Parse one results line. `line` is 1-based.
pub fn parse_record_line(line: usize, text: &str) -> Result<SolutionRecord, CheckError> {
    let malformed = |reason: String| CheckError::MalformedRecord {
        line,
        content: text.trim().to_string(),
        reason,
    };

    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(malformed(format!("expected 5 integers, found {} field(s)", fields.len())));
    }

    let mut values = Vec::with_capacity(5);
    for field in &fields {
        let value: BigInt = field
            .parse()
            .map_err(|_| malformed(format!("'{field}' is not an integer")))?;
        values.push(value);
    }

    let [a, b, c, d, s]: [BigInt; 5] = values
        .try_into()
        .map_err(|_| malformed("expected 5 integers".into()))?;
    Ok(SolutionRecord { line, a, b, c, d, s })
}

/// Parse the whole results text in file order. Blank lines are ignored.
///
/// A malformed line aborts the load unless `skip_malformed` is set, in which
/// case it is logged and returned in `skipped`.
pub fn load_records(text: &str, skip_malformed: bool) -> Result<LoadedRecords, CheckError> {
    let mut loaded = LoadedRecords::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            log::debug!("results line {line}: blank, ignored");
            continue;
        }
        match parse_record_line(line, raw) {
            Ok(record) => loaded.records.push(record),
            Err(CheckError::MalformedRecord { line, content, reason }) if skip_malformed => {
                log::warn!("skipping results line {line}: {reason}");
                loaded.skipped.push(SkippedLine { line, content, reason });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(loaded)
}

/// Parse the reference enumeration into its set of sums.
///
/// Lines with fewer than two fields and `#` comment lines are ignored. A
/// second field that is not an integer is an error rather than a skip, so a
/// garbled feed cannot shrink the reference silently.
pub fn parse_reference(text: &str) -> Result<SumSet, CheckError> {
    let mut sums = SumSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let trimmed = raw.trim_start();
        if trimmed.starts_with('#') {
            continue;
        }
        let mut fields = trimmed.split_whitespace();
        let (Some(_), Some(sum)) = (fields.next(), fields.next()) else {
            continue;
        };
        let value: BigInt = sum.parse().map_err(|_| CheckError::ReferenceParse {
            line: idx + 1,
            content: raw.trim().to_string(),
        })?;
        sums.insert(value);
    }

    Ok(sums)
}
