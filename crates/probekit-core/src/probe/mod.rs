//! Library probes.
//!
//! Each probe makes one short call sequence against a single library and
//! returns the diagnostic lines it produced. Probes never share state; a
//! failure in one has no effect on the others.

pub mod compress;
pub mod digest;
pub mod fetch;
pub mod listing;

use std::fmt;

use crate::config::ProbeConfig;
use crate::error::ProbeError;

/// Which library probe to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeKind {
    Digest,
    Compress,
    Fetch,
    Listing,
}

impl ProbeKind {
    /// Every probe, in the order `all` runs them.
    pub const ALL: [ProbeKind; 4] = [
        ProbeKind::Digest,
        ProbeKind::Compress,
        ProbeKind::Fetch,
        ProbeKind::Listing,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProbeKind::Digest => "digest",
            ProbeKind::Compress => "compress",
            ProbeKind::Fetch => "fetch",
            ProbeKind::Listing => "listing",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Diagnostic output of one probe run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: ProbeKind,
    pub lines: Vec<String>,
}

impl Report {
    pub fn new(kind: ProbeKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
        }
    }

    pub(crate) fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }
}

/// A probe that stopped early: the lines it printed before the failing call,
/// and the failure itself.
#[derive(Debug)]
pub struct ProbeFailure {
    pub partial: Report,
    pub error: ProbeError,
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.partial.kind, self.error)
    }
}

impl std::error::Error for ProbeFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Run a single probe with the given configuration.
///
/// On failure the lines emitted before the failing call are kept in
/// [`ProbeFailure::partial`].
pub fn run(kind: ProbeKind, cfg: &ProbeConfig) -> Result<Report, ProbeFailure> {
    tracing::debug!(probe = %kind, "running probe");
    let mut report = Report::new(kind);
    let result = match kind {
        ProbeKind::Digest => {
            digest::run(&cfg.digest, &mut report);
            Ok(())
        }
        ProbeKind::Compress => compress::run(&cfg.compress, &mut report),
        ProbeKind::Fetch => fetch::run(&cfg.fetch, &mut report),
        ProbeKind::Listing => listing::run(&cfg.listing, &mut report),
    };
    match result {
        Ok(()) => Ok(report),
        Err(error) => {
            tracing::warn!(probe = %kind, error = %error, "probe failed");
            Err(ProbeFailure {
                partial: report,
                error,
            })
        }
    }
}
