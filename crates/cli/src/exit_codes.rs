//! CLI Exit Code Registry
//!
//! Single source of truth for `powersum` exit codes. Scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Code | Domain    | Description                                        |
//! |------|-----------|----------------------------------------------------|
//! | 0    | Universal | Report completed (default mode, whatever it found) |
//! | 1    | Universal | General error (unspecified)                        |
//! | 2    | Universal | Usage or config error                              |
//! | 3-4  | check     | Strict-mode findings                               |
//! | 5-7  | input     | Results / reference loading failures               |
//!
//! Codes 3 and 4 only occur with `--strict`; without it the checker is
//! report-only and exits 0 once the report is printed.

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - report completed.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, invalid config file.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Check findings (3-4), strict mode only
// =============================================================================

/// At least one record fails the identity. Takes precedence over mismatch.
pub const EXIT_CHECK_INVALID: u8 = 3;

/// Found sums and reference sums differ.
pub const EXIT_CHECK_MISMATCH: u8 = 4;

// =============================================================================
// Input (5-7)
// =============================================================================

/// Results file unreadable or holds a malformed record.
pub const EXIT_RESULTS: u8 = 5;

/// Reference enumeration could not be retrieved (network, HTTP status, file).
pub const EXIT_REFERENCE_UNAVAILABLE: u8 = 6;

/// Reference enumeration retrieved but a sum field does not parse.
pub const EXIT_REFERENCE_PARSE: u8 = 7;

use powersum_recon::CheckError;

/// Map an engine error to its exit code.
pub fn check_exit_code(err: &CheckError) -> u8 {
    match err {
        CheckError::ConfigParse(_) | CheckError::ConfigValidation(_) => EXIT_USAGE,
        CheckError::MalformedRecord { .. } => EXIT_RESULTS,
        CheckError::ReferenceUnavailable(_) => EXIT_REFERENCE_UNAVAILABLE,
        CheckError::ReferenceParse { .. } => EXIT_REFERENCE_PARSE,
    }
}
