//! Probe failure type.
//!
//! Each variant names the failing library call; the wrapped source carries
//! the library's own code or message.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("compress failed: {0}")]
    Compress(#[source] io::Error),

    #[error("uncompress failed: {0}")]
    Decompress(#[source] io::Error),

    /// Decompression succeeded but did not reproduce the input.
    #[error("round-trip mismatch: expected {expected} bytes, recovered {actual}")]
    RoundTripMismatch { expected: usize, actual: usize },

    #[error("curl: {0}")]
    Transfer(#[from] curl::Error),

    #[error("cannot list {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid probe config: {0}")]
    Config(String),
}
