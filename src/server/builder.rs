//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{AdminError, Result};
use tracing::info;

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| AdminError::Config("Configuration is required".to_string()))?;

        config.validate()?;
        HttpServer::new(&config).await
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the server with automatic configuration loading
///
/// Loads config/admin.yaml when present, falling back to environment
/// variables and defaults.
pub async fn run_server() -> Result<()> {
    info!("Starting RBAC admin service");

    let config_path = "config/admin.yaml";

    let config = match Config::from_file(config_path).await {
        Ok(config) => {
            info!("Loaded configuration from {}", config_path);
            config
        }
        Err(e) => {
            info!(
                "No configuration file ({}), using environment and defaults",
                e
            );
            Config::from_env()?
        }
    };

    config.validate()?;

    let server = HttpServer::new(&config).await?;
    info!(
        "Server starting at http://{}:{}",
        config.server.host, config.server.port
    );

    server.start().await
}
