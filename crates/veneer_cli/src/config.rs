//! Veneer configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use veneer_tokens::TokenStore;
use veneer_viewport::{MediaState, ViewportThresholds};

pub const CONFIG_FILE: &str = "veneer.toml";

const DEFAULT_WIDTH: f32 = 1440.0;

/// Top-level Veneer configuration (veneer.toml)
///
/// ```toml
/// [tokens]
/// file = "design/tokens.toml"
///
/// [viewport]
/// md = 640
/// lg = 1024
///
/// [media]
/// width = 1440
/// color-scheme = "dark"
/// ```
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct VeneerConfig {
    #[serde(default)]
    pub tokens: TokensConfig,
    #[serde(default)]
    pub viewport: ViewportThresholds,
    /// Media state used when a command is not given a width
    #[serde(default)]
    pub media: Option<MediaState>,
}

/// Token source
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TokensConfig {
    /// Token table replacing the built-in catalog (relative to the config
    /// file)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl VeneerConfig {
    /// Load `path`, or `veneer.toml` in the working directory if present,
    /// else the defaults
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf)> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                if !local.exists() {
                    tracing::debug!("no {} found, using defaults", CONFIG_FILE);
                    return Ok((Self::default(), PathBuf::from(".")));
                }
                local
            }
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let base = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        tracing::debug!("loaded config from {}", config_path.display());
        Ok((config, base))
    }

    pub fn from_toml_str(src: &str) -> Result<Self> {
        toml::from_str(src).context("Invalid veneer configuration")
    }

    /// The configured token table, or the built-in catalog
    pub fn token_store(&self, base: &Path) -> Result<TokenStore> {
        match &self.tokens.file {
            Some(file) => load_token_store(&base.join(file)),
            None => Ok(TokenStore::builtin()),
        }
    }

    /// The configured media state, or a 1440px desktop
    pub fn media_state(&self) -> MediaState {
        self.media
            .unwrap_or_else(|| MediaState::desktop(DEFAULT_WIDTH))
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

pub fn load_token_store(path: &Path) -> Result<TokenStore> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    TokenStore::from_toml_str(&content)
        .with_context(|| format!("Failed to load tokens from {}", path.display()))
}
