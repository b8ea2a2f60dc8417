use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Transport configuration for the dashboard client, fixed at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base path or absolute URL of the dashboard API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Attach session cookies to every request (authenticated variant).
    #[serde(default)]
    pub attach_credentials: bool,
}

fn default_base_url() -> String {
    "/api".to_string()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            attach_credentials: false,
        }
    }
}

impl ClientConfig {
    /// Load config from disk, or return the defaults if no file exists yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: ClientConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-dashboard", "dashboard-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_backend_contract() {
        let cfg = ClientConfig::default();

        assert_eq!(cfg.base_url, "/api");
        assert_eq!(cfg.timeout_ms, 30_000);
        assert!(!cfg.attach_credentials);
    }

    #[test]
    fn toml_round_trip_preserves_fields() {
        let cfg = ClientConfig {
            base_url: "https://dashboard.example.com/api".to_string(),
            timeout_ms: 5_000,
            attach_credentials: true,
        };

        let toml = toml::to_string_pretty(&cfg).expect("serialize");
        let parsed: ClientConfig = toml::from_str(&toml).expect("deserialize");

        assert_eq!(parsed, cfg);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: ClientConfig =
            toml::from_str("base_url = \"http://localhost:8080/api\"").expect("deserialize");

        assert_eq!(parsed.base_url, "http://localhost:8080/api");
        assert_eq!(parsed.timeout_ms, 30_000);
        assert!(!parsed.attach_credentials);
    }
}
