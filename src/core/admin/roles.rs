//! Role mutation operations

use crate::core::models::{Role, RoleWithPermissions};
use crate::utils::error::{AdminError, Result};
use tracing::info;
use uuid::Uuid;

use super::AdminService;

impl AdminService {
    /// List all roles
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        self.db().list_roles().await
    }

    /// List all roles together with the permissions they grant
    pub async fn list_roles_with_permissions(&self) -> Result<Vec<RoleWithPermissions>> {
        self.db().list_roles_with_permissions().await
    }

    /// Create a role with a unique name and a non-empty permission set
    pub async fn create_role(&self, name: &str, permission_ids: &[Uuid]) -> Result<Role> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AdminError::validation("Role name is required"));
        }

        if self.db().find_role_by_name(name).await?.is_some() {
            return Err(AdminError::validation(format!(
                "Role name '{}' is already taken",
                name
            )));
        }

        let permission_ids = self.resolve_permission_set(permission_ids).await?;

        let role = self
            .db()
            .create_role(&Role::new(name.to_string()), &permission_ids)
            .await?;

        info!(
            "Role created: {} ({}) with {} permissions",
            role.name,
            role.id,
            permission_ids.len()
        );
        Ok(role)
    }

    /// Replace a role's name and permission set
    pub async fn update_role(
        &self,
        role_id: Uuid,
        name: &str,
        permission_ids: &[Uuid],
    ) -> Result<()> {
        let role = self
            .db()
            .find_role_by_id(role_id)
            .await?
            .ok_or_else(|| AdminError::not_found("Role not found"))?;

        let name = name.trim();
        if name.is_empty() {
            return Err(AdminError::validation("Role name is required"));
        }

        // Unique name, excluding the role's own current row
        if let Some(existing) = self.db().find_role_by_name(name).await? {
            if existing.id != role.id {
                return Err(AdminError::validation(format!(
                    "Role name '{}' is already taken",
                    name
                )));
            }
        }

        let permission_ids = self.resolve_permission_set(permission_ids).await?;

        self.db()
            .replace_role(role_id, name, &permission_ids)
            .await?;

        info!(
            "Role updated: {} ({}) with {} permissions",
            name,
            role_id,
            permission_ids.len()
        );
        Ok(())
    }

    /// Delete a role, failing while any user still references it
    pub async fn delete_role(&self, role_id: Uuid) -> Result<()> {
        let role = self
            .db()
            .find_role_by_id(role_id)
            .await?
            .ok_or_else(|| AdminError::not_found("Role not found"))?;

        let users_with_role = self.db().count_users_with_role(role_id).await?;
        if users_with_role > 0 {
            return Err(AdminError::conflict(
                "Cannot delete role because it is assigned to users",
            ));
        }

        self.db().delete_role(role_id).await?;

        info!("Role deleted: {} ({})", role.name, role.id);
        Ok(())
    }

    /// Validate a permission id set: non-empty, deduplicated, all resolvable
    async fn resolve_permission_set(&self, permission_ids: &[Uuid]) -> Result<Vec<Uuid>> {
        if permission_ids.is_empty() {
            return Err(AdminError::validation(
                "A role requires at least one permission",
            ));
        }

        let mut ids = permission_ids.to_vec();
        ids.sort();
        ids.dedup();

        let found = self.db().find_permissions_by_ids(&ids).await?;
        if found.len() != ids.len() {
            return Err(AdminError::validation(
                "One or more selected permissions do not exist",
            ));
        }

        Ok(ids)
    }
}
