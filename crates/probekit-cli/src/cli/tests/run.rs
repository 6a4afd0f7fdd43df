//! Tests for probe execution: failure isolation, stderr diagnostics, exit status.

use crate::cli::commands::run_probes;
use probekit_core::config::ProbeConfig;
use probekit_core::probe::ProbeKind;
use std::io::{self, Write};

fn run_captured(kinds: &[ProbeKind], cfg: &ProbeConfig) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let ok = run_probes(kinds, cfg, &mut out, &mut err);
    (
        ok,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn failing_listing_does_not_stop_digest() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = ProbeConfig::default();
    cfg.listing.dir = Some(dir.path().join("missing"));

    let (ok, out, err) = run_captured(&[ProbeKind::Listing, ProbeKind::Digest], &cfg);

    assert!(!ok, "any failed probe must fail the run");
    assert!(out.contains(
        "[sha2] SHA256('abc'): ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    ));
    assert!(!out.contains("List: "));
    assert!(err.starts_with("probekit: listing failed: cannot list "));
    assert_eq!(err.lines().count(), 1);
}

#[test]
fn all_succeeding_probes_return_true() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("f.txt"), b"x").unwrap();
    let mut cfg = ProbeConfig::default();
    cfg.listing.dir = Some(dir.path().to_path_buf());

    let (ok, out, err) = run_captured(
        &[ProbeKind::Digest, ProbeKind::Compress, ProbeKind::Listing],
        &cfg,
    );

    assert!(ok);
    assert!(err.is_empty());
    let digest_at = out.find("[sha2]").unwrap();
    let compress_at = out.find("Original    : ").unwrap();
    let listing_at = out.find("[F] f.txt").unwrap();
    assert!(digest_at < compress_at && compress_at < listing_at);
}

#[test]
fn failed_fetch_prints_version_lines_before_diagnostic() {
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let mut cfg = ProbeConfig::default();
    cfg.fetch.url = format!("http://127.0.0.1:{}/", port);
    cfg.fetch.connect_timeout_secs = 2;
    cfg.fetch.timeout_secs = 5;

    let (ok, out, err) = run_captured(&[ProbeKind::Fetch], &cfg);

    assert!(!ok);
    assert!(out.starts_with("[cURL] version    : "));
    assert!(out.contains("[cURL] SSL        : "));
    assert!(!out.contains("HTTP status"));
    assert!(err.starts_with("probekit: fetch failed: curl: "));
}

/// Stdout whose reader has gone away.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn closed_stdout_does_not_panic_or_fail_the_run() {
    let mut err = Vec::new();
    let ok = run_probes(
        &[ProbeKind::Digest, ProbeKind::Compress],
        &ProbeConfig::default(),
        &mut ClosedPipe,
        &mut err,
    );
    assert!(ok);
    assert!(err.is_empty());
}
