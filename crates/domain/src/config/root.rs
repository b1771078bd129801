use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::zone::ZoneConfig;

/// Main configuration structure for tierdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Endpoints for the serving tiers
    #[serde(default)]
    pub server: ServerConfig,

    /// Static seed data per tier
    #[serde(default)]
    pub zone: ZoneConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. tierdns.toml in current directory
    /// 3. /etc/tierdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("tierdns.toml").exists() {
            Self::from_file("tierdns.toml")?
        } else if std::path::Path::new("/etc/tierdns/config.toml").exists() {
            Self::from_file("/etc/tierdns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.recursive_port {
            self.server.recursive_port = port;
        }
        if let Some(port) = overrides.authoritative_port {
            self.server.authoritative_port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid bind address '{}'",
                self.server.bind_address
            )));
        }

        if self.server.recursive_port == 0 || self.server.authoritative_port == 0 {
            return Err(ConfigError::Validation(
                "Resolver ports cannot be 0".to_string(),
            ));
        }

        if self.server.recursive_port == self.server.authoritative_port {
            return Err(ConfigError::Validation(
                "Recursive and authoritative tiers cannot share a port".to_string(),
            ));
        }

        for record in self
            .zone
            .authoritative
            .iter()
            .chain(self.zone.recursive.iter())
        {
            record.to_record().map_err(|e| {
                ConfigError::Validation(format!("Zone record '{}': {}", record.name, e))
            })?;
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub recursive_port: Option<u16>,
    pub authoritative_port: Option<u16>,
    pub log_level: Option<String>,
}
