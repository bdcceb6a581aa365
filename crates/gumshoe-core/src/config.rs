//! Configuration management for gumshoe.
//!
//! Loads configuration from ${GUMSHOE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::providers::groq::SamplingParams;

/// Per-provider configuration (credential and endpoint overrides).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// API key. Falls back to the API_KEY environment variable when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL override for the chat-completions endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Provider configuration section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub groq: ProviderConfig,
}

/// Main configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Model identifier sent with every request.
    pub model: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Nucleus-sampling top-p.
    pub top_p: f32,

    /// Max output tokens for batch (`ask`) requests.
    pub max_tokens: u32,

    /// Max output tokens for streaming requests.
    pub stream_max_tokens: u32,

    /// Stop sequences (none by default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,

    /// Provider configuration (credentials, base URLs).
    pub providers: ProvidersConfig,
}

impl Config {
    const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";
    const DEFAULT_TEMPERATURE: f32 = 0.6;
    const DEFAULT_TOP_P: f32 = 0.95;
    const DEFAULT_MAX_TOKENS: u32 = 500;
    const DEFAULT_STREAM_MAX_TOKENS: u32 = 4096;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default template to `path`.
    ///
    /// # Errors
    /// Fails if the file already exists (no silent overwrite).
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Sampling parameters for batch (`ask`) requests.
    pub fn ask_params(&self) -> SamplingParams {
        SamplingParams {
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.max_tokens,
            stop: self.stop.clone(),
        }
    }

    /// Sampling parameters for streaming requests.
    pub fn stream_params(&self) -> SamplingParams {
        SamplingParams {
            temperature: self.temperature,
            top_p: self.top_p,
            max_tokens: self.stream_max_tokens,
            stop: self.stop.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: Self::DEFAULT_MODEL.to_string(),
            temperature: Self::DEFAULT_TEMPERATURE,
            top_p: Self::DEFAULT_TOP_P,
            max_tokens: Self::DEFAULT_MAX_TOKENS,
            stream_max_tokens: Self::DEFAULT_STREAM_MAX_TOKENS,
            stop: None,
            providers: ProvidersConfig::default(),
        }
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for gumshoe configuration.
    //!
    //! GUMSHOE_HOME resolution order:
    //! 1. GUMSHOE_HOME environment variable (if set)
    //! 2. ~/.config/gumshoe (default)

    use std::path::PathBuf;

    /// Returns the gumshoe home directory.
    ///
    /// Checks GUMSHOE_HOME env var first, falls back to ~/.config/gumshoe
    pub fn gumshoe_home() -> PathBuf {
        if let Ok(home) = std::env::var("GUMSHOE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("gumshoe"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        gumshoe_home().join("config.toml")
    }
}
