use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of redirect hops followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: u32 = 5;

/// Fetch behaviour. The CLI always runs with `FetchConfig::default()`;
/// library users may load one from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Maximum number of 3xx hops followed for one fetch.
    pub max_redirects: u32,
    /// Connect timeout in seconds (None = libcurl default).
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds (None = no timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_redirects: DEFAULT_MAX_REDIRECTS,
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

impl FetchConfig {
    /// Parse a TOML document; missing keys take their defaults.
    ///
    /// Library API for embedders. The `pagemeta` binary never reads config.
    pub fn from_toml_str(data: &str) -> Result<Self> {
        let cfg: FetchConfig = toml::from_str(data).context("invalid fetch config")?;
        Ok(cfg)
    }
}

/// Load configuration from a TOML file.
///
/// Library API for embedders. The `pagemeta` binary never reads config.
pub fn load_from_path(path: &Path) -> Result<FetchConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg = FetchConfig::from_toml_str(&data)?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
