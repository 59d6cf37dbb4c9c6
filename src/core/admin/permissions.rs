//! Permission mutation operations

use crate::core::models::Permission;
use crate::utils::error::{AdminError, Result};
use tracing::info;
use uuid::Uuid;

use super::AdminService;

impl AdminService {
    /// List all permissions
    pub async fn list_permissions(&self) -> Result<Vec<Permission>> {
        self.db().list_permissions().await
    }

    /// Create a new permission with a unique name
    pub async fn create_permission(&self, name: &str) -> Result<Permission> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AdminError::validation("Permission name is required"));
        }

        if self.db().find_permission_by_name(name).await?.is_some() {
            return Err(AdminError::validation(format!(
                "Permission name '{}' is already taken",
                name
            )));
        }

        let permission = self
            .db()
            .create_permission(&Permission::new(name.to_string()))
            .await?;

        info!("Permission created: {} ({})", permission.name, permission.id);
        Ok(permission)
    }

    /// Delete a permission, failing while any role still references it
    pub async fn delete_permission(&self, permission_id: Uuid) -> Result<()> {
        let permission = self
            .db()
            .find_permission_by_id(permission_id)
            .await?
            .ok_or_else(|| AdminError::not_found("Permission not found"))?;

        let roles_using = self.db().count_roles_with_permission(permission_id).await?;
        if roles_using > 0 {
            return Err(AdminError::conflict(
                "Cannot delete permission because it is used by roles",
            ));
        }

        self.db().delete_permission(permission_id).await?;

        info!("Permission deleted: {} ({})", permission.name, permission.id);
        Ok(())
    }
}
