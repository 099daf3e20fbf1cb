use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, ScoutError};

/// Top-level configuration for the Scout application.
///
/// Loaded from `scout.toml` in the working directory by default. Each section
/// corresponds to one subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            catalog: CatalogConfig::default(),
            chat: ChatConfig::default(),
        }
    }
}

impl ScoutConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ScoutConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| ScoutError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Print the welcome banner on startup.
    pub show_banner: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_banner: true,
        }
    }
}

/// Event catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the events JSON file.
    pub events_file: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            events_file: "data/events.json".to_string(),
        }
    }
}

/// Conversation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Number of results shown per page.
    pub page_size: usize,
    /// Transcript entries retained per session.
    pub max_history_turns: usize,
    /// Reply language selected at startup.
    pub default_language: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            page_size: 3,
            max_history_turns: 50,
            default_language: "english".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = ScoutConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert!(config.general.show_banner);
        assert_eq!(config.catalog.events_file, "data/events.json");
        assert_eq!(config.chat.page_size, 3);
        assert_eq!(config.chat.max_history_turns, 50);
        assert_eq!(config.chat.default_language, "english");
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"
show_banner = false

[catalog]
events_file = "/srv/scout/events.json"

[chat]
page_size = 5
max_history_turns = 20
default_language = "french"
"#;
        let file = create_temp_config(content);
        let config = ScoutConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert!(!config.general.show_banner);
        assert_eq!(config.catalog.events_file, "/srv/scout/events.json");
        assert_eq!(config.chat.page_size, 5);
        assert_eq!(config.chat.max_history_turns, 20);
        assert_eq!(config.chat.default_language, "french");
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[chat]
page_size = 10
"#;
        let file = create_temp_config(content);
        let config = ScoutConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.page_size, 10);
        // Remaining fields use defaults
        assert_eq!(config.chat.max_history_turns, 50);
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.catalog.events_file, "data/events.json");
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ScoutConfig::load_or_default(Path::new("/nonexistent/scout.toml"));
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.page_size, 3);
    }

    #[test]
    fn test_load_invalid_toml() {
        let content = "this is {{ not valid TOML";
        let file = create_temp_config(content);
        assert!(ScoutConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = ScoutConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.catalog.events_file, "data/events.json");
        assert_eq!(config.chat.page_size, 3);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scout.toml");

        let mut config = ScoutConfig::default();
        config.chat.default_language = "chinese".to_string();
        config.save(&path).unwrap();

        let reloaded = ScoutConfig::load(&path).unwrap();
        assert_eq!(reloaded.chat.default_language, "chinese");
        assert_eq!(reloaded.chat.page_size, config.chat.page_size);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("dir").join("scout.toml");

        let config = ScoutConfig::default();
        config.save(&path).unwrap();

        assert!(path.exists());
        let reloaded = ScoutConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.log_level, "info");
    }
}
