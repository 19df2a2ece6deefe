//! Gallery configuration.
//!
//! Read from `~/.config/pokedex-gallery/config.json`. Every field is
//! optional; a missing or unreadable file falls back to the defaults.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use pokedex_gallery::PageRequest;
use pokedex_gallery::loader::{GALLERY_OFFSET, GALLERY_SIZE};
use pokedex_pokeapi::client::DEFAULT_BASE_URL;

/// Gallery configuration file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// PokeAPI base URL.
    pub base_url: String,

    /// First catalog entry to show.
    pub offset: u32,

    /// Number of entries to show.
    pub limit: u32,

    /// Output file for the rendered page. Empty means stdout.
    pub output: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            offset: GALLERY_OFFSET,
            limit: GALLERY_SIZE,
            output: String::new(),
        }
    }
}

impl GalleryConfig {
    /// Loads the configuration from the default location.
    pub fn load() -> anyhow::Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads the configuration from `path`.
    ///
    /// A missing file yields the defaults. A file that fails to parse is
    /// logged and also yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse gallery config, using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            offset: self.offset,
            limit: self.limit,
        }
    }

    /// Output path, or `None` for stdout.
    pub fn output_path(&self) -> Option<PathBuf> {
        (!self.output.is_empty()).then(|| PathBuf::from(&self.output))
    }
}

/// Returns `<config dir>/pokedex-gallery/config.json`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("pokedex-gallery").join("config.json"))
}

/// Returns the platform-specific config directory.
fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|h| PathBuf::from(h).join(".config"))
            })
    }

    #[cfg(target_os = "windows")]
    {
        std::env::var("APPDATA").ok().map(PathBuf::from)
    }

    #[cfg(not(any(target_os = "linux", target_os = "windows")))]
    {
        std::env::var("HOME")
            .ok()
            .map(|h| PathBuf::from(h).join(".config"))
    }
}
