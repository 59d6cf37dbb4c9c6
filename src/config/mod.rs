//! Configuration management for the admin service
//!
//! This module handles loading and validation of all service configuration.

pub mod models;

pub use models::{AuthConfig, DatabaseConfig, SeedConfig, ServerConfig};

use crate::utils::error::{AdminError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the admin service
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,
    /// Bootstrap seeding configuration
    #[serde(default)]
    pub seed: SeedConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AdminError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AdminError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Config::default();

        if let Ok(host) = std::env::var("ADMIN_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("ADMIN_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| AdminError::Config(format!("Invalid ADMIN_PORT: {}", e)))?;
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            config.database.url = url;
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.auth.jwt_secret = secret;
        }
        if let Ok(password) = std::env::var("SEED_ADMIN_PASSWORD") {
            config.seed.admin_password = password;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| AdminError::Config(format!("Server config error: {}", e)))?;
        self.database
            .validate()
            .map_err(|e| AdminError::Config(format!("Database config error: {}", e)))?;
        self.auth
            .validate()
            .map_err(|e| AdminError::Config(format!("Auth config error: {}", e)))?;
        self.seed
            .validate()
            .map_err(|e| AdminError::Config(format!("Seed config error: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
server:
  host: 0.0.0.0
  port: 9000
database:
  url: "sqlite::memory:"
auth:
  jwt_expiration: 7200
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.auth.jwt_expiration, 7200);
    }

    #[tokio::test]
    async fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin.yaml");
        let yaml = r#"
server:
  port: 9100
auth:
  jwt_secret: "0123456789abcdef0123456789abcdef"
"#;
        tokio::fs::write(&path, yaml).await.unwrap();

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.auth.jwt_secret, "0123456789abcdef0123456789abcdef");
    }

    #[tokio::test]
    async fn test_missing_config_file_errors() {
        let err = Config::from_file("does/not/exist.yaml").await.unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }
}
