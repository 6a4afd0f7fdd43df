//! `probekit hex encode|decode`.

use anyhow::{Context, Result};
use probekit_core::hexcode;
use std::io::{self, Write};

use crate::cli::HexAction;

pub fn run_hex(action: HexAction) -> Result<()> {
    let bytes = match action {
        HexAction::Encode { text } => hexcode::encode(text.as_bytes()).into_bytes(),
        HexAction::Decode { hex } => hexcode::decode(hex.trim()).context("hex decode")?,
    };
    let mut out = io::stdout().lock();
    match out
        .write_all(&bytes)
        .and_then(|()| out.write_all(b"\n"))
        .and_then(|()| out.flush())
    {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(()),
    }
}
