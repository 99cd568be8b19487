use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::normalize::{self, InvalidUrl};
use crate::notice::Locale;
use crate::viewer::ViewerOptions;

/// Viewer and page-loading settings (`[viewer]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Show a loading indicator before the first page arrives.
    pub start_in_loading_state: bool,
    /// Allow back/forward through pages visited inside the viewer.
    pub back_forward_gestures: bool,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total transfer timeout in seconds.
    pub timeout_secs: u64,
    /// Body bytes kept per page (enough to find the title).
    pub max_body_bytes: usize,
    /// Optional User-Agent header; libcurl's default when unset.
    pub user_agent: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            start_in_loading_state: true,
            back_forward_gestures: true,
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_body_bytes: 1024 * 1024,
            user_agent: None,
        }
    }
}

impl ViewerConfig {
    pub fn options(&self) -> ViewerOptions {
        ViewerOptions {
            start_in_loading_state: self.start_in_loading_state,
            back_forward_gestures: self.back_forward_gestures,
        }
    }
}

/// Global configuration loaded from `~/.config/openurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenUrlConfig {
    /// Language of user-facing notices.
    pub locale: Locale,
    /// Address the viewer shows when opened without a URL.
    pub fallback_url: String,
    pub viewer: ViewerConfig,
}

impl Default for OpenUrlConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            fallback_url: "https://example.com".to_string(),
            viewer: ViewerConfig::default(),
        }
    }
}

impl OpenUrlConfig {
    /// The fallback address, run through the normalizer.
    pub fn fallback(&self) -> Result<Url, InvalidUrl> {
        normalize::normalize(Some(&self.fallback_url))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("openurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OpenUrlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OpenUrlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<OpenUrlConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: OpenUrlConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
