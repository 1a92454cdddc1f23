//! # Console Configuration
//!
//! Where the data file lives and how chatty the log is.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                               │
//! │     --data-file ./coop.json                                             │
//! │                                                                         │
//! │  2. Environment Variables                                               │
//! │     COOP_DATA_FILE=/srv/coop/coop.json                                  │
//! │     COOP_LOG=debug                                                      │
//! │                                                                         │
//! │  3. TOML Config File                                                    │
//! │     --config <path>, or                                                 │
//! │     ~/.config/coop-store/coop.toml (Linux)                              │
//! │     ~/Library/Application Support/org.coop.store/coop.toml (macOS)      │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                    │
//! │     <data dir>/coop.json, log filter "info"                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `RUST_LOG`, when set, replaces the configured log filter entirely.
//!
//! ## Configuration File Format
//! ```toml
//! # coop.toml
//! [data]
//! file = "/srv/coop/coop.json"
//!
//! [log]
//! filter = "info,coop_core=debug"
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{ConsoleError, ConsoleResult};

/// Name of the snapshot file inside the data directory.
pub const DATA_FILE_NAME: &str = "coop.json";

/// Name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "coop.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "coop", "store")
}

// =============================================================================
// Sections
// =============================================================================

/// Data file settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSettings {
    /// Snapshot file loaded at start-up and written by "save".
    #[serde(default = "default_data_file")]
    pub file: PathBuf,
}

fn default_data_file() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(DATA_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
}

impl Default for DataSettings {
    fn default() -> Self {
        DataSettings {
            file: default_data_file(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive, e.g. `info` or `warn,coop_core=debug`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// Console Configuration
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub data: DataSettings,

    #[serde(default)]
    pub log: LogSettings,
}

impl ConsoleConfig {
    /// Loads configuration from file and environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> ConsoleResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading console config from file");
                let contents = std::fs::read_to_string(&path)
                    .map_err(|e| ConsoleError::ConfigLoadFailed(e.to_string()))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Rejects settings the console cannot run with.
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.data.file.as_os_str().is_empty() {
            return Err(ConsoleError::InvalidConfig(
                "data file path must not be empty".into(),
            ));
        }

        if self.log.filter.trim().is_empty() {
            return Err(ConsoleError::InvalidConfig(
                "log filter must not be empty".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `COOP_*` overrides from `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(file) = lookup("COOP_DATA_FILE") {
            debug!(file = %file, "Overriding data file from environment");
            self.data.file = PathBuf::from(file);
        }

        if let Some(filter) = lookup("COOP_LOG") {
            self.log.filter = filter;
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use uuid::Uuid;

    fn temp_config(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("coop-config-{}.toml", Uuid::new_v4()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert!(config.data.file.ends_with(DATA_FILE_NAME));
        assert_eq!(config.log.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_values_fill_missing_sections() {
        let path = temp_config("[data]\nfile = \"/srv/coop/store.json\"\n");
        let config: ConsoleConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.data.file, PathBuf::from("/srv/coop/store.json"));
        assert_eq!(config.log.filter, "info");
    }

    #[test]
    fn test_env_overrides_beat_file() {
        let mut config: ConsoleConfig =
            toml::from_str("[data]\nfile = \"from-file.json\"\n[log]\nfilter = \"warn\"\n")
                .unwrap();
        let env: HashMap<&str, &str> =
            HashMap::from([("COOP_DATA_FILE", "from-env.json"), ("COOP_LOG", "debug")]);

        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.data.file, PathBuf::from("from-env.json"));
        assert_eq!(config.log.filter, "debug");
    }

    #[test]
    fn test_empty_data_path_rejected() {
        let mut config = ConsoleConfig::default();
        config.apply_overrides(|key| (key == "COOP_DATA_FILE").then(String::new));

        assert!(matches!(
            config.validate(),
            Err(ConsoleError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = temp_config("[data\nfile = 3");
        let result = ConsoleConfig::load(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConsoleError::ConfigLoadFailed(_))));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&ConsoleConfig::default()).unwrap();
        assert!(toml_str.contains("[data]"));
        assert!(toml_str.contains("[log]"));
    }
}
