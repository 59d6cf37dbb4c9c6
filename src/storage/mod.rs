//! Storage layer for the admin service
//!
//! This module provides data persistence for users, roles, and permissions.

pub mod database;

use crate::config::DatabaseConfig;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Main storage layer wrapping the database backend
#[derive(Debug, Clone)]
pub struct StorageLayer {
    /// Database connection pool
    pub database: Arc<database::Database>,
}

impl StorageLayer {
    /// Create a new storage layer
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(config).await?);
        database.migrate().await?;

        info!("Storage layer initialized successfully");
        Ok(Self { database })
    }

    /// Get the database backend
    pub fn db(&self) -> &database::Database {
        &self.database
    }

    /// Health check for all storage backends
    pub async fn health_check(&self) -> Result<()> {
        self.database.health_check().await
    }
}
