//! Scout configuration.
//!
//! Config file: ~/.config/scout/config.toml, overridable with
//! SCOUT_CONFIG. Missing file means defaults; a malformed file is an
//! error, not a silent fallback.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_model() -> String {
    "llama2".to_string()
}

fn default_host() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_export_dir() -> Option<PathBuf> {
    None
}

/// Main Scout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Ollama model used for replies and question generation.
    #[serde(default = "default_model")]
    pub model: String,

    /// Ollama base URL.
    #[serde(default = "default_host")]
    pub host: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Where exports land. Defaults to the current directory.
    #[serde(default = "default_export_dir")]
    pub export_dir: Option<PathBuf>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            host: default_host(),
            timeout_secs: default_timeout_secs(),
            export_dir: default_export_dir(),
        }
    }
}

impl ScoutConfig {
    /// Resolve the config file path.
    ///
    /// Priority: SCOUT_CONFIG env var, then ~/.config/scout/config.toml.
    pub fn path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("SCOUT_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("scout").join("config.toml"))
    }

    /// Load the config, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Write the config back to disk, creating parent directories.
    pub fn save(&self) -> Result<()> {
        let path = Self::path().context("Could not determine config path")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    /// Apply a `key=value` override from the CLI.
    pub fn set_value(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment
            .split_once('=')
            .context("Expected key=value (e.g., model=llama2)")?;

        match key.trim() {
            "model" => self.model = value.trim().to_string(),
            "host" => self.host = value.trim().to_string(),
            "timeout_secs" => {
                self.timeout_secs = value
                    .trim()
                    .parse()
                    .context("timeout_secs must be a number of seconds")?;
            }
            "export_dir" => self.export_dir = Some(PathBuf::from(value.trim())),
            other => anyhow::bail!("Unknown config key: {other}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScoutConfig::default();
        assert_eq!(config.model, "llama2");
        assert_eq!(config.host, "http://127.0.0.1:11434");
        assert_eq!(config.timeout_secs, 60);
        assert!(config.export_dir.is_none());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ScoutConfig = toml::from_str("model = \"mistral\"").unwrap();
        assert_eq!(config.model, "mistral");
        assert_eq!(config.host, "http://127.0.0.1:11434");
    }

    #[test]
    fn test_set_value() {
        let mut config = ScoutConfig::default();
        config.set_value("model=codellama").unwrap();
        assert_eq!(config.model, "codellama");

        config.set_value("timeout_secs=120").unwrap();
        assert_eq!(config.timeout_secs, 120);

        assert!(config.set_value("bogus=1").is_err());
        assert!(config.set_value("no-equals").is_err());
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let mut config = ScoutConfig::default();
        config.model = "llama2:13b".to_string();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: ScoutConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.model, "llama2:13b");
    }
}
