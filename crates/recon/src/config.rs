use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CheckError;

pub const DEFAULT_EXPONENT: u32 = 3;
/// Largest accepted exponent. Powers of six-digit bases stay in the tens of
/// kilobytes at this bound.
pub const MAX_EXPONENT: u32 = 1000;
pub const DEFAULT_RESULTS: &str = "results.txt";
pub const DEFAULT_REFERENCE: &str = "https://oeis.org/A018786/b018786.txt";

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

/// Run configuration. Every field has a default, so an empty TOML document
/// reproduces the stock run: cubes, `results.txt`, the OEIS b-file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckConfig {
    /// Exponent `n` used in the identity check.
    #[serde(default = "default_exponent")]
    pub exponent: u32,
    /// Path of the local results file.
    #[serde(default = "default_results")]
    pub results: String,
    /// URL (`http://`, `https://`) or local path of the reference enumeration.
    #[serde(default = "default_reference")]
    pub reference: String,
    /// Request timeout for a URL reference. `None` waits indefinitely.
    #[serde(default)]
    pub reference_timeout_secs: Option<u64>,
    /// Exit nonzero on invalid records or reconciliation mismatches.
    #[serde(default)]
    pub strict: bool,
    /// Skip malformed results lines with a warning instead of aborting.
    #[serde(default)]
    pub skip_malformed: bool,
}

fn default_exponent() -> u32 {
    DEFAULT_EXPONENT
}

fn default_results() -> String {
    DEFAULT_RESULTS.into()
}

fn default_reference() -> String {
    DEFAULT_REFERENCE.into()
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_EXPONENT,
            results: default_results(),
            reference: default_reference(),
            reference_timeout_secs: None,
            strict: false,
            skip_malformed: false,
        }
    }
}

/// Where the reference enumeration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    Url(String),
    File(PathBuf),
}

impl std::fmt::Display for ReferenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "{url}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl CheckConfig {
    pub fn from_toml(input: &str) -> Result<Self, CheckError> {
        let config: CheckConfig =
            toml::from_str(input).map_err(|e| CheckError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CheckError> {
        if self.exponent == 0 {
            return Err(CheckError::ConfigValidation(
                "exponent must be a positive integer".into(),
            ));
        }

        if self.exponent > MAX_EXPONENT {
            return Err(CheckError::ConfigValidation(format!(
                "exponent {} exceeds the maximum of {MAX_EXPONENT}",
                self.exponent
            )));
        }

        if self.results.trim().is_empty() {
            return Err(CheckError::ConfigValidation("results path is empty".into()));
        }

        if self.reference.trim().is_empty() {
            return Err(CheckError::ConfigValidation("reference location is empty".into()));
        }

        if self.reference_timeout_secs == Some(0) {
            return Err(CheckError::ConfigValidation(
                "reference_timeout_secs must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Results path, resolved against `base_dir` when relative.
    pub fn results_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.results)
    }

    /// Classify the reference location. Relative file paths resolve against
    /// `base_dir`; URLs are left untouched.
    pub fn reference_source(&self, base_dir: &Path) -> ReferenceSource {
        let loc = self.reference.trim();
        if loc.starts_with("http://") || loc.starts_with("https://") {
            ReferenceSource::Url(loc.to_string())
        } else {
            ReferenceSource::File(base_dir.join(loc))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
