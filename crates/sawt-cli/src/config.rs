use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API key used for synthesis and enhancement calls.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    pub voice: Option<String>,
}

fn config_path(path: Option<&PathBuf>) -> PathBuf {
    path.cloned().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|p| p.join("sawt").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    })
}

impl Config {
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        let config_path = config_path(path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, path: Option<&PathBuf>) -> Result<()> {
        let config_path = config_path(path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config {
            api_key: Some("test-key".to_string()),
            defaults: DefaultsConfig {
                voice: Some("Kore".to_string()),
            },
        };
        let content = toml::to_string_pretty(&config).expect("serialize");
        let parsed: Config = toml::from_str(&content).expect("parse");
        assert_eq!(parsed.api_key.as_deref(), Some("test-key"));
        assert_eq!(parsed.defaults.voice.as_deref(), Some("Kore"));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("").expect("parse empty");
        assert!(parsed.api_key.is_none());
        assert!(parsed.defaults.voice.is_none());
    }
}
