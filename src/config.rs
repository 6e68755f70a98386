//! Configuration management for the MI5 terminal server
//!
//! Settings come from an optional `config.toml`, overridden by `MI5_*`
//! environment variables. Missing keys fall back to defaults.

use config::{Config, Environment, File, FileFormat};
use log::{info, warn};
use serde::Deserialize;
use std::path::Path;

/// Candidate configuration files, without extension, in lookup order.
const CONFIG_PATHS: [&str; 2] = [
    "mi5-terminal/config", // Container layout: /app/mi5-terminal/config.toml
    "config",              // Local development: ./config.toml
];

const ENV_PREFIX: &str = "MI5";

/// Complete server configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address to bind the listener
    pub bind_address: String,

    /// TCP port to listen on; 0 picks an ephemeral port
    pub port: u16,

    /// Maximum concurrent sessions
    /// Environment: MI5_MAX_CLIENTS
    pub max_clients: usize,

    /// Maximum input line length in bytes
    pub max_command_length: usize,

    /// Emit ANSI colors
    pub color: bool,

    /// Send the greeting banner on connect
    pub greeting: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 2323,
            max_clients: 10,
            max_command_length: 512,
            color: true,
            greeting: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder();
        let mut found = false;

        for config_path in CONFIG_PATHS {
            if Path::new(&format!("{config_path}.toml")).exists() {
                info!("Loading configuration from {config_path}.toml");
                builder = builder.add_source(File::with_name(config_path));
                found = true;
            }
        }

        if !found {
            warn!("No config.toml found (tried {CONFIG_PATHS:?}); using defaults");
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text without consulting the environment
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        let config: ServerConfig = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.bind_address.is_empty() {
            return Err(config::ConfigError::Message(
                "bind_address cannot be empty".into(),
            ));
        }

        if self.max_clients == 0 {
            return Err(config::ConfigError::Message(
                "max_clients must be greater than 0".into(),
            ));
        }

        if self.max_command_length == 0 {
            return Err(config::ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get bind address and port as socket address
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
