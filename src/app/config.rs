//! Parse policy configuration

use serde::{Deserialize, Serialize};

use crate::core::ActionLine;
use crate::parser;

/// How script lines are parsed and classified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Skip malformed feather numbers instead of rejecting the line.
    /// Turn off when validating a script for correctness.
    pub ignore_invalid_floats: bool,
    /// Retry with the lenient parser when the strict one fails
    pub allow_loose: bool,
    /// Lines starting with this prefix are comments
    pub comment_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_invalid_floats: true,
            allow_loose: true,
            comment_prefix: "#".to_string(),
        }
    }
}

impl Config {
    /// Configuration for validating a script rather than displaying it
    pub fn validating() -> Self {
        Self {
            ignore_invalid_floats: false,
            ..Self::default()
        }
    }

    /// Parse an action line under this policy
    pub fn parse_action(&self, line: &str) -> Option<ActionLine> {
        if self.allow_loose {
            parser::parse(line, self.ignore_invalid_floats)
        } else {
            parser::parse_strict(line, self.ignore_invalid_floats).ok()
        }
    }

    /// Check if a (trimmed) line is a comment
    pub fn is_comment(&self, line: &str) -> bool {
        !self.comment_prefix.is_empty() && line.starts_with(&self.comment_prefix)
    }

    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from default location or return default config
    pub fn load_or_default() -> Self {
        // Try to load from ~/.config/tas-script/config.json
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }
        Self::default()
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<std::path::PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| std::path::PathBuf::from(home).join(".config").join("tas-script"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Actions;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.ignore_invalid_floats);
        assert!(config.allow_loose);
        assert_eq!(config.comment_prefix, "#");
    }

    #[test]
    fn test_parse_action_policy() {
        let config = Config::default();
        assert_eq!(
            config.parse_action("15rj").map(|line| line.actions),
            Some(Actions::RIGHT | Actions::JUMP)
        );

        let strict_only = Config {
            allow_loose: false,
            ..Config::default()
        };
        assert_eq!(strict_only.parse_action("15rj"), None);

        assert!(Config::default().parse_action("1,F,1..2").is_some());
        assert!(Config::validating().parse_action("1,F,1..2").is_none());
    }

    #[test]
    fn test_is_comment() {
        let config = Config::default();
        assert!(config.is_comment("#Start"));
        assert!(!config.is_comment("Read file"));

        let no_comments = Config {
            comment_prefix: String::new(),
            ..Config::default()
        };
        assert!(!no_comments.is_comment("#Start"));
    }

    #[test]
    fn test_config_save_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = Config::validating();
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_config_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "allow_loose": false }"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert!(!config.allow_loose);
        assert!(config.ignore_invalid_floats);
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
