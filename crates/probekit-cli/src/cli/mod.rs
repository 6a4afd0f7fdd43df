//! CLI for probekit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use probekit_core::config::{self, DigestAlgorithm, ProbeConfig};
use probekit_core::probe::ProbeKind;
use std::io;
use std::path::PathBuf;

use commands::{run_completions, run_hex, run_manpage, run_probes};

/// Top-level CLI for probekit.
#[derive(Debug, Parser)]
#[command(name = "probekit")]
#[command(about = "probekit: check that hashing, compression, HTTP and filesystem libraries link and work", long_about = None)]
pub struct Cli {
    /// Ignore ~/.config/probekit/config.toml and use built-in defaults.
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Sha256,
    Sha512,
}

impl From<AlgorithmArg> for DigestAlgorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Sha256 => DigestAlgorithm::Sha256,
            AlgorithmArg::Sha512 => DigestAlgorithm::Sha512,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum HexAction {
    /// Print the lowercase hex encoding of TEXT's UTF-8 bytes.
    Encode { text: String },
    /// Decode HEX and write the raw bytes to stdout.
    Decode { hex: String },
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Hash a string and print the hex digest.
    Digest {
        /// Text to hash (default from config: "abc").
        #[arg(long)]
        input: Option<String>,
        #[arg(long, value_enum)]
        algorithm: Option<AlgorithmArg>,
    },

    /// Compress a string with zlib, decompress it, and verify the round-trip.
    Compress {
        /// Text to compress.
        #[arg(long)]
        input: Option<String>,
        /// zlib compression level.
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=9))]
        level: Option<u32>,
    },

    /// Perform one HTTP GET and print the status and byte count.
    Fetch {
        /// URL to GET.
        #[arg(long)]
        url: Option<String>,
        /// Do not follow redirects.
        #[arg(long)]
        no_follow: bool,
    },

    /// List a directory (default: current directory), tagging [D]irs and [F]iles.
    List {
        dir: Option<PathBuf>,
    },

    /// Run every probe in turn; a failing probe does not stop the rest.
    All,

    /// Hex encode or decode.
    Hex {
        #[command(subcommand)]
        action: HexAction,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },

    /// Print the man page (roff) to stdout.
    Manpage,
}

/// Fill `cfg` from per-invocation flags. Returns the probes the command runs.
fn apply_overrides(cfg: &mut ProbeConfig, cmd: CliCommand) -> Vec<ProbeKind> {
    match cmd {
        CliCommand::Digest { input, algorithm } => {
            if let Some(input) = input {
                cfg.digest.input = input;
            }
            if let Some(a) = algorithm {
                cfg.digest.algorithm = a.into();
            }
            vec![ProbeKind::Digest]
        }
        CliCommand::Compress { input, level } => {
            if let Some(input) = input {
                cfg.compress.input = input;
            }
            if let Some(level) = level {
                cfg.compress.level = level;
            }
            vec![ProbeKind::Compress]
        }
        CliCommand::Fetch { url, no_follow } => {
            if let Some(url) = url {
                cfg.fetch.url = url;
            }
            if no_follow {
                cfg.fetch.follow_redirects = false;
            }
            vec![ProbeKind::Fetch]
        }
        CliCommand::List { dir } => {
            if dir.is_some() {
                cfg.listing.dir = dir;
            }
            vec![ProbeKind::Listing]
        }
        CliCommand::All => ProbeKind::ALL.to_vec(),
        CliCommand::Hex { .. } | CliCommand::Completions { .. } | CliCommand::Manpage => Vec::new(),
    }
}

fn load_config(no_config: bool) -> ProbeConfig {
    if no_config {
        return ProbeConfig::default();
    }
    match config::load_or_init() {
        Ok(cfg) => {
            tracing::debug!("loaded config: {:?}", cfg);
            cfg
        }
        Err(err) => {
            eprintln!("probekit: config: {:#}; using defaults", err);
            tracing::warn!("config load failed: {:#}", err);
            ProbeConfig::default()
        }
    }
}

impl CliCommand {
    /// Parses args and runs the command. `Ok(false)` means at least one probe failed.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Hex { action } => {
                run_hex(action)?;
                Ok(true)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(true)
            }
            CliCommand::Manpage => {
                run_manpage()?;
                Ok(true)
            }
            cmd => {
                let mut cfg = load_config(cli.no_config);
                let kinds = apply_overrides(&mut cfg, cmd);
                cfg.validate()?;
                Ok(run_probes(
                    &kinds,
                    &cfg,
                    &mut io::stdout().lock(),
                    &mut io::stderr().lock(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests;
