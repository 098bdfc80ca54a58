//! Configuration for the tag-translation updater
//!
//! Replaces the original build-resource lookup with a TOML file plus
//! environment-variable overrides. The dataset pair is optional: when it is
//! absent the whole feature is disabled and the updater reports itself
//! unavailable.

use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Default HTTP timeout for dataset downloads, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default directory (relative to the working directory) for cached datasets
pub const DEFAULT_DATA_DIR: &str = "tag-translations";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for tagtrans_common::TagTransError {
    fn from(err: ConfigError) -> Self {
        tagtrans_common::TagTransError::config(err.to_string())
    }
}

/// The `(file_name, remote_url)` pair identifying one dataset
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DatasetConfig {
    /// Name of the cached file on local storage
    pub file_name: String,
    /// Location of the remote dataset document
    pub remote_url: Url,
}

/// Full updater configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpdaterConfig {
    /// Configured dataset, if any; `None` disables the feature
    pub dataset: Option<DatasetConfig>,
    /// Directory holding the cached dataset file and its `.tmp` sibling
    pub data_dir: PathBuf,
    /// HTTP timeout for downloads, in seconds
    pub timeout_secs: u64,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Configuration loader for the updater
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file with environment overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<UpdaterConfig, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: UpdaterConfig = toml::from_str(&content)?;
        Self::apply_env_overrides(&mut config)?;
        Ok(config)
    }

    /// Load configuration from the conventional locations.
    ///
    /// Order: `TAGTRANS_CONFIG_PATH` env var, then `tagtrans.toml` in the
    /// working directory, then built-in defaults. Environment overrides
    /// apply in every case.
    pub fn load() -> Result<UpdaterConfig, ConfigError> {
        if let Ok(config_path) = env::var("TAGTRANS_CONFIG_PATH") {
            Self::load_config(&config_path)
        } else if Path::new("tagtrans.toml").exists() {
            Self::load_config("tagtrans.toml")
        } else {
            let mut config = UpdaterConfig::default();
            Self::apply_env_overrides(&mut config)?;
            Ok(config)
        }
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// The dataset pair is only overridden when both `TAGTRANS_DATA_FILE`
    /// and `TAGTRANS_DATA_URL` are set; a lone variable is ignored, the
    /// same way a malformed build resource disabled the feature upstream.
    fn apply_env_overrides(config: &mut UpdaterConfig) -> Result<(), ConfigError> {
        if let (Ok(file_name), Ok(url)) = (
            env::var("TAGTRANS_DATA_FILE"),
            env::var("TAGTRANS_DATA_URL"),
        ) {
            let remote_url = url.parse().map_err(|e| ConfigError::EnvParse {
                var: "TAGTRANS_DATA_URL".to_string(),
                source: Box::new(e),
            })?;
            config.dataset = Some(DatasetConfig {
                file_name,
                remote_url,
            });
        }

        if let Ok(dir) = env::var("TAGTRANS_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        if let Ok(timeout) = env::var("TAGTRANS_HTTP_TIMEOUT") {
            config.timeout_secs = timeout.parse().map_err(|e| ConfigError::EnvParse {
                var: "TAGTRANS_HTTP_TIMEOUT".to_string(),
                source: Box::new(e),
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UpdaterConfig::default();
        assert!(config.dataset.is_none());
        assert_eq!(config.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
            data_dir = "/var/lib/tagtrans"
            timeout_secs = 10

            [dataset]
            file_name = "translations.zh.json"
            remote_url = "https://example.com/db/translations.zh.json"
        "#;
        let config: UpdaterConfig = toml::from_str(toml_str).unwrap();
        let dataset = config.dataset.unwrap();
        assert_eq!(dataset.file_name, "translations.zh.json");
        assert_eq!(
            dataset.remote_url.as_str(),
            "https://example.com/db/translations.zh.json"
        );
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/tagtrans"));
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_parse_toml_without_dataset() {
        let config: UpdaterConfig = toml::from_str("timeout_secs = 5").unwrap();
        assert!(config.dataset.is_none());
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_env_overrides_require_both_dataset_vars() {
        // A lone file name must not enable the feature
        env::set_var("TAGTRANS_DATA_FILE", "translations.json");
        let mut config = UpdaterConfig::default();
        ConfigLoader::apply_env_overrides(&mut config).unwrap();
        assert!(config.dataset.is_none());

        env::set_var("TAGTRANS_DATA_URL", "https://example.com/translations.json");
        ConfigLoader::apply_env_overrides(&mut config).unwrap();
        let dataset = config.dataset.as_ref().unwrap();
        assert_eq!(dataset.file_name, "translations.json");

        env::remove_var("TAGTRANS_DATA_FILE");
        env::remove_var("TAGTRANS_DATA_URL");
    }

    #[test]
    fn test_invalid_url_rejected() {
        let toml_str = r#"
            [dataset]
            file_name = "translations.json"
            remote_url = "not a url"
        "#;
        assert!(toml::from_str::<UpdaterConfig>(toml_str).is_err());
    }
}
