use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use safeplate_classifier::ClassifyOptions;
use safeplate_search::RankingPolicy;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use strum::{AsRefStr, Display, EnumString};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub classifier: ClassifyOptions,
    #[serde(default)]
    pub search: RankingPolicy,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Directory holding `restaurants.json`, `rules.json` and the CSV tables
    pub dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, EnumString, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SAFEPLATE__DATASET__DIR, etc.)
    /// 2. Config file specified by path, CONFIG_PATH or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("dataset.dir", "data")?
            .set_default("observability.log_level", "info")?
            .set_default("observability.format", "pretty")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional, defaults and environment are enough to run
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SAFEPLATE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.dataset.dir.as_os_str().is_empty() {
            return Err("Dataset dir must not be empty".to_string());
        }
        self.search.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            dataset: DatasetConfig {
                dir: PathBuf::from("data"),
            },
            observability: ObservabilityConfig::default(),
            classifier: ClassifyOptions::default(),
            search: RankingPolicy::default(),
        }
    }

    #[test]
    fn test_validation_ok() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_dataset_dir() {
        let mut config = config();
        config.dataset.dir = PathBuf::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_positive_filter_penalty() {
        let mut config = config();
        config.search.filter_miss = 2;

        assert_eq!(
            config.validate().unwrap_err(),
            "search.filter_miss must be between -1000 and -1, got 2"
        );
    }
}
