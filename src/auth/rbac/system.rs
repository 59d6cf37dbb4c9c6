//! RBAC system core functionality

use crate::config::AuthConfig;
use crate::core::models::{RoleWithPermissions, User};
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::debug;

use super::types::GateDecision;

/// RBAC system resolving roles to permissions against current storage state
///
/// Every check re-reads the role's permission set; nothing is cached, so a
/// permission revoked mid-session takes effect on the next check.
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// Storage layer holding users, roles, and permissions
    storage: Arc<StorageLayer>,
    /// Permission names a role must grant to enter the admin area
    admin_permissions: Vec<String>,
}

impl RbacSystem {
    /// Create a new RBAC system
    pub fn new(config: &AuthConfig, storage: Arc<StorageLayer>) -> Self {
        Self {
            storage,
            admin_permissions: config.admin_permissions.clone(),
        }
    }

    /// Resolve a user's current role with its permission set
    ///
    /// A missing reference and a dangling one (role deleted out from under the
    /// user) both resolve to `None`, never to an error.
    async fn resolve_role(&self, user: &User) -> Result<Option<RoleWithPermissions>> {
        let Some(role_id) = user.role_id else {
            return Ok(None);
        };

        self.storage.db().find_role_with_permissions(role_id).await
    }

    /// Check whether a user's current role grants a permission by name
    pub async fn user_has_permission(&self, user: &User, permission_name: &str) -> Result<bool> {
        match self.resolve_role(user).await? {
            Some(role) => Ok(role.grants(permission_name)),
            None => Ok(false),
        }
    }

    /// Check whether a user's current role grants every admin permission
    pub async fn is_admin(&self, user: &User) -> Result<bool> {
        let Some(role) = self.resolve_role(user).await? else {
            return Ok(false);
        };

        Ok(self
            .admin_permissions
            .iter()
            .all(|name| role.grants(name)))
    }

    /// Decide whether a (nullable) principal may enter the admin area
    pub async fn check_admin_access(&self, principal: Option<&User>) -> Result<GateDecision> {
        let Some(user) = principal else {
            debug!("Admin gate: no principal");
            return Ok(GateDecision::Deny);
        };

        if self.is_admin(user).await? {
            Ok(GateDecision::Allow)
        } else {
            debug!("Admin gate: denied user {}", user.id);
            Ok(GateDecision::Deny)
        }
    }

    /// Permission names required for admin access
    pub fn admin_permissions(&self) -> &[String] {
        &self.admin_permissions
    }
}
