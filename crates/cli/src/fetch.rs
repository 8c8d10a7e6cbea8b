//! Reference enumeration retrieval.
//!
//! A single blocking attempt: no retry, and no timeout unless one is
//! configured. Any transport or status failure is `ReferenceUnavailable`,
//! never an empty body.

use std::time::Duration;

use powersum_recon::config::ReferenceSource;
use powersum_recon::CheckError;

pub(crate) const USER_AGENT: &str = concat!("powersum/", env!("CARGO_PKG_VERSION"));

/// Retrieve the raw reference text from a URL or local file.
pub fn load_reference(source: &ReferenceSource, timeout_secs: Option<u64>) -> Result<String, CheckError> {
    match source {
        ReferenceSource::Url(url) => fetch_url(url, timeout_secs),
        ReferenceSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
            CheckError::ReferenceUnavailable(format!("cannot read {}: {e}", path.display()))
        }),
    }
}

fn fetch_url(raw_url: &str, timeout_secs: Option<u64>) -> Result<String, CheckError> {
    let url = url::Url::parse(raw_url)
        .map_err(|e| CheckError::ConfigValidation(format!("invalid reference URL '{raw_url}': {e}")))?;

    let http = reqwest::blocking::Client::builder()
        .timeout(timeout_secs.map(Duration::from_secs))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| CheckError::ReferenceUnavailable(format!("cannot build HTTP client: {e}")))?;

    log::info!("fetching reference enumeration from {url}");

    let resp = http
        .get(url.clone())
        .send()
        .map_err(|e| CheckError::ReferenceUnavailable(format!("GET {url}: {e}")))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(CheckError::ReferenceUnavailable(format!(
            "GET {url}: HTTP {}",
            status.as_u16()
        )));
    }

    let body = resp
        .text()
        .map_err(|e| CheckError::ReferenceUnavailable(format!("reading body of {url}: {e}")))?;

    log::debug!("reference body: {} bytes", body.len());
    Ok(body)
}

// ── Tests ───────────────────────────────────────────────────────────
