//! Network-fetch probe: one HTTP GET through libcurl (the `curl` crate).
//!
//! The easy handle is the transfer handle: it is created, configured, used for
//! a single `perform`, and dropped before `fetch` returns.

use std::time::Duration;

use super::Report;
use crate::config::FetchConfig;
use crate::error::ProbeError;

/// What one GET produced.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Final HTTP status (after redirects, if followed).
    pub status: u32,
    pub body: Vec<u8>,
}

/// libcurl and TLS backend version strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlVersion {
    pub version: String,
    pub ssl_version: Option<String>,
}

pub fn curl_version() -> CurlVersion {
    let v = curl::Version::get();
    CurlVersion {
        version: v.version().to_string(),
        ssl_version: v.ssl_version().map(str::to_string),
    }
}

/// Performs a single GET and collects the body in memory.
///
/// Any HTTP status is returned as-is; only transfer-level failures are errors.
pub fn fetch(cfg: &FetchConfig) -> Result<FetchOutcome, ProbeError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(&cfg.url)?;
    easy.follow_location(cfg.follow_redirects)?;
    if let (true, Some(max)) = (cfg.follow_redirects, cfg.max_redirections) {
        easy.max_redirections(max)?;
    }
    easy.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))?;
    easy.timeout(Duration::from_secs(cfg.timeout_secs))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url = %cfg.url, status, bytes = body.len(), "GET complete");
    Ok(FetchOutcome { status, body })
}

/// Version lines are written before the transfer, so they survive a failed GET.
pub fn run(cfg: &FetchConfig, report: &mut Report) -> Result<(), ProbeError> {
    let version = curl_version();
    report.line(format!("[cURL] version    : {}", version.version));
    report.line(format!(
        "[cURL] SSL        : {}",
        version.ssl_version.as_deref().unwrap_or("(none)")
    ));

    let outcome = fetch(cfg)?;
    report.line(format!("[cURL] HTTP status: {}", outcome.status));
    report.line(format!("[cURL] bytes      : {}", outcome.body.len()));
    Ok(())
}
