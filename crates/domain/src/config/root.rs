use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-resolver.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-resolver/config.toml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure for the resolver client
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-resolver.toml in current directory
    /// 3. /etc/ferrous-resolver/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(nameserver) = overrides.nameserver {
            self.resolver.nameserver = nameserver;
        }
        if let Some(timeout) = overrides.query_timeout_ms {
            self.resolver.query_timeout_ms = timeout;
        }
        if let Some(retries) = overrides.retries {
            self.resolver.retries = retries;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolver.nameserver().map_err(ConfigError::Validation)?;

        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Validation("Query timeout cannot be 0".to_string()));
        }

        if self.resolver.max_alias_depth == 0 {
            return Err(ConfigError::Validation(
                "Maximum alias depth cannot be 0".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub nameserver: Option<String>,
    pub query_timeout_ms: Option<u64>,
    pub retries: Option<u32>,
    pub log_level: Option<String>,
}
