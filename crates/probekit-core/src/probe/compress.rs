//! Compression round-trip probe (zlib format via `flate2`).

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use super::Report;
use crate::config::CompressConfig;
use crate::error::ProbeError;

/// Compress `data` into a zlib stream at `level` (0..=9).
pub fn compress(data: &[u8], level: u32) -> Result<Vec<u8>, ProbeError> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::new(level));
    enc.write_all(data).map_err(ProbeError::Compress)?;
    enc.finish().map_err(ProbeError::Compress)
}

/// Inflate a zlib stream. `size_hint` only pre-sizes the output buffer.
pub fn decompress(data: &[u8], size_hint: usize) -> Result<Vec<u8>, ProbeError> {
    let mut out = Vec::with_capacity(size_hint);
    ZlibDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(ProbeError::Decompress)?;
    Ok(out)
}

pub fn run(cfg: &CompressConfig, report: &mut Report) -> Result<(), ProbeError> {
    let input = cfg.input.as_bytes();
    let packed = compress(input, cfg.level)?;
    let unpacked = decompress(&packed, input.len())?;
    if unpacked != input {
        return Err(ProbeError::RoundTripMismatch {
            expected: input.len(),
            actual: unpacked.len(),
        });
    }
    tracing::debug!(
        input_len = input.len(),
        compressed_len = packed.len(),
        level = cfg.level,
        "zlib round-trip ok"
    );

    report.line(format!("Original    : {}", cfg.input));
    report.line(format!("Compressed  : {} bytes", packed.len()));
    report.line(format!(
        "Decompressed: {}",
        String::from_utf8_lossy(&unpacked)
    ));
    Ok(())
}
