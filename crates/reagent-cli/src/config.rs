//! Configuration management for reagent.toml

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use reagent_core::AgentConfig;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub agent: AgentSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub name: String,
    pub base_url: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "llama3.2".to_string(),
            base_url: reagent_llm::DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentSection {
    pub max_turns: usize,
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            max_turns: AgentConfig::default().max_turns,
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists
    pub fn load() -> Self {
        Self::find_config_path()
            .and_then(|path| Self::load_from(path).ok())
            .unwrap_or_default()
    }

    /// Load configuration from a specific path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read {}", path.as_ref().display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.as_ref().display()))
    }

    /// Look for reagent.toml in the working directory, then the user
    /// config directory.
    fn find_config_path() -> Option<PathBuf> {
        let local = PathBuf::from("reagent.toml");
        if local.exists() {
            return Some(local);
        }

        let user = dirs::config_dir()?.join("reagent").join("reagent.toml");
        user.exists().then_some(user)
    }
}
