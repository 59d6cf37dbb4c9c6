//! Authentication and authorization system
//!
//! Token-based authentication plus the RBAC gate and predicate. The acting
//! principal is always resolved here and passed explicitly into checks; no
//! ambient request-global state.

pub mod jwt;
pub mod rbac;

pub use rbac::{GateDecision, RbacSystem};

use crate::config::AuthConfig;
use crate::core::models::User;
use crate::storage::StorageLayer;
use crate::utils::crypto::verify_password;
use crate::utils::error::{AdminError, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Main authentication system
#[derive(Debug, Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    config: Arc<AuthConfig>,
    /// Storage layer for user data
    storage: Arc<StorageLayer>,
    /// JWT handler
    jwt: Arc<jwt::JwtHandler>,
    /// RBAC system
    rbac: Arc<rbac::RbacSystem>,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig, storage: Arc<StorageLayer>) -> Self {
        let jwt = Arc::new(jwt::JwtHandler::new(config));
        let rbac = Arc::new(rbac::RbacSystem::new(config, storage.clone()));

        Self {
            config: Arc::new(config.clone()),
            storage,
            jwt,
            rbac,
        }
    }

    /// Login with email and password, returning the user and an access token
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String)> {
        info!("User login attempt: {}", email);

        let user = self
            .storage
            .db()
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| AdminError::auth("Invalid email or password"))?;

        if !verify_password(password, &user.password_hash)? {
            warn!("Login attempt with invalid password: {}", email);
            return Err(AdminError::auth("Invalid email or password"));
        }

        let token = self.jwt.create_access_token(user.id)?;

        info!("User logged in successfully: {}", email);
        Ok((user, token))
    }

    /// Resolve an access token to its user
    pub async fn authenticate_token(&self, token: &str) -> Result<User> {
        let claims = self
            .jwt
            .verify_token(token)
            .map_err(|e| AdminError::auth(format!("Invalid token: {}", e)))?;

        self.storage
            .db()
            .find_user_by_id(claims.sub)
            .await?
            .ok_or_else(|| AdminError::auth("User not found"))
    }

    /// Get authentication configuration
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Get JWT handler
    pub fn jwt(&self) -> &jwt::JwtHandler {
        &self.jwt
    }

    /// Get RBAC system
    pub fn rbac(&self) -> &rbac::RbacSystem {
        &self.rbac
    }
}
