use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ProbeError;

/// Hash algorithm used by the digest probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl DigestAlgorithm {
    pub fn label(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA256",
            DigestAlgorithm::Sha512 => "SHA512",
        }
    }
}

/// `[digest]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfig {
    /// Text whose UTF-8 bytes are hashed.
    pub input: String,
    pub algorithm: DigestAlgorithm,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            input: "abc".to_string(),
            algorithm: DigestAlgorithm::Sha256,
        }
    }
}

/// `[compress]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressConfig {
    /// Text that is compressed and recovered.
    pub input: String,
    /// zlib level, 0 (store) through 9 (best).
    pub level: u32,
}

impl Default for CompressConfig {
    fn default() -> Self {
        Self {
            input: "Hello zlib round-trip via probekit!".to_string(),
            level: 6,
        }
    }
}

/// `[fetch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub url: String,
    pub follow_redirects: bool,
    /// Redirect cap when `follow_redirects` is set; `None` keeps libcurl's own limit.
    pub max_redirections: Option<u32>,
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout.
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: "https://example.com/".to_string(),
            follow_redirects: true,
            max_redirections: None,
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

/// `[listing]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Directory to enumerate; `None` = current working directory.
    pub dir: Option<PathBuf>,
}

/// Probe configuration loaded from `~/.config/probekit/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    pub digest: DigestConfig,
    pub compress: CompressConfig,
    pub fetch: FetchConfig,
    pub listing: ListingConfig,
}

impl ProbeConfig {
    /// Rejects values the probes cannot act on.
    pub fn validate(&self) -> Result<(), ProbeError> {
        if self.compress.level > 9 {
            return Err(ProbeError::Config(format!(
                "compress.level must be 0..=9, got {}",
                self.compress.level
            )));
        }
        if self.fetch.url.trim().is_empty() {
            return Err(ProbeError::Config("fetch.url is empty".to_string()));
        }
        if self.fetch.connect_timeout_secs == 0 || self.fetch.timeout_secs == 0 {
            return Err(ProbeError::Config(
                "fetch timeouts must be at least 1 second".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("probekit")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ProbeConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<ProbeConfig> {
    if !path.exists() {
        let default_cfg = ProbeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ProbeConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
