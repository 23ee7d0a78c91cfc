use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::OhceError;

/// Top-level OHCE configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ohce: OhceConfig,
}

/// General session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OhceConfig {
    /// Language used when the chosen code is unknown.
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for OhceConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

fn default_language() -> String {
    crate::i18n::DEFAULT_CODE.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, OhceError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| OhceError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| OhceError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.ohce.default_language, "fr");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let cfg = load("/nonexistent/ohce-config.toml").unwrap();
        assert_eq!(cfg.ohce.default_language, "fr");
    }

    #[test]
    fn test_parse_from_toml() {
        let toml_str = r#"
            [ohce]
            default_language = "en"
        "#;
        let cfg: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.ohce.default_language, "en");
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.ohce.default_language, "fr");
    }
}
