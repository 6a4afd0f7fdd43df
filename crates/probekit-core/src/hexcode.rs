//! Lowercase hexadecimal rendering of raw bytes, plus the paired decoder.
//!
//! `encode` is total: every byte becomes exactly two digits from
//! `0123456789abcdef`, high nibble first, with no prefix or separators.

use thiserror::Error;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Error returned by [`decode`] for input that is not a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    #[error("odd number of hex digits ({0})")]
    OddLength(usize),
    #[error("invalid hex character {ch:?} at index {index}")]
    InvalidChar { index: usize, ch: char },
}

/// Render `bytes` as lowercase hex. Output length is always `2 * bytes.len()`.
pub fn encode(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        s.push(DIGITS[(b >> 4) as usize] as char);
        s.push(DIGITS[(b & 0x0f) as usize] as char);
    }
    s
}

/// Parse a hex string (either case, no separators) back into bytes.
pub fn decode(text: &str) -> Result<Vec<u8>, HexError> {
    if text.len() % 2 != 0 {
        return Err(HexError::OddLength(text.len()));
    }
    let raw = text.as_bytes();
    let mut out = Vec::with_capacity(raw.len() / 2);
    for (i, pair) in raw.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0]).ok_or_else(|| invalid(text, i * 2))?;
        let lo = nibble(pair[1]).ok_or_else(|| invalid(text, i * 2 + 1))?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Builds the error for the byte at `index`, reporting the full char it starts
/// (or sits inside) so multi-byte UTF-8 input yields a readable message.
fn invalid(text: &str, index: usize) -> HexError {
    let start = (0..=index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0);
    let ch = text[start..].chars().next().unwrap_or('\u{fffd}');
    HexError::InvalidChar { index: start, ch }
}
