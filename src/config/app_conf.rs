use std::env;

use tracing::{debug, error, info};

use crate::config::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load server configuration from environment variables
    ///
    /// Expected environment variables:
    /// - APP_HOST: bind address (defaults to 127.0.0.1)
    /// - APP_PORT: bind port (defaults to 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        debug!("App host: {}", host);

        let port = match env::var("APP_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                error!("Invalid APP_PORT value: {}", raw);
                ConfigError::ParseError(format!("Invalid APP_PORT value: {raw}"))
            })?,
            Err(_) => 8080,
        };
        debug!("App port: {}", port);

        let config = AppConfig { host, port };
        config.validate()?;
        info!("App configuration loaded successfully");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            error!("App host is empty");
            return Err(ConfigError::ValidationError(
                "App host cannot be empty".to_string(),
            ));
        }
        if self.host.parse::<std::net::IpAddr>().is_err() {
            error!("App host is not a valid IP address: {}", self.host);
            return Err(ConfigError::ValidationError(format!(
                "App host is not a valid IP address: {}",
                self.host
            )));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_host() {
        let mut config = AppConfig::default();
        config.host = "not-an-ip".to_string();
        assert!(config.validate().is_err());
    }
}
