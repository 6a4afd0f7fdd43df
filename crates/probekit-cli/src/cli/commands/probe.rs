//! `probekit digest|compress|fetch|list|all`: run probes and print their reports.

use probekit_core::config::ProbeConfig;
use probekit_core::probe::{self, ProbeKind};
use std::io::{self, Write};

/// Runs each probe in order, writing reports to `out` and failures to `err`.
/// A failed probe's partial lines still go to `out` ahead of its diagnostic.
/// Returns true if every probe succeeded.
///
/// Write errors are ignored: a reader closing the pipe early (`| head`)
/// must not change which probes run or the exit status.
pub fn run_probes(
    kinds: &[ProbeKind],
    cfg: &ProbeConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> bool {
    let mut all_ok = true;
    for &kind in kinds {
        match probe::run(kind, cfg) {
            Ok(report) => emit(out, &report.to_string()),
            Err(failure) => {
                emit(out, &failure.partial.to_string());
                emit(err, &format!("probekit: {}\n", failure));
                all_ok = false;
            }
        }
    }
    tracing::info!(probes = kinds.len(), all_ok, "probe run finished");
    all_ok
}

fn emit(w: &mut impl Write, text: &str) {
    if let Err(e) = w.write_all(text.as_bytes()).and_then(|()| w.flush()) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            tracing::warn!("output write failed: {}", e);
        }
    }
}
