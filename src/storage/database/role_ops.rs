use crate::core::models::{Role, RoleWithPermissions};
use crate::utils::error::{AdminError, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::debug;
use uuid::Uuid;

use super::Database;
use super::entities::{self, role, role_permission};

impl Database {
    /// Find role by ID
    pub async fn find_role_by_id(&self, role_id: Uuid) -> Result<Option<Role>> {
        debug!("Finding role by ID: {}", role_id);

        let role_model = entities::Role::find_by_id(role_id)
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(role_model.map(|model| model.to_domain()))
    }

    /// Find role by name
    pub async fn find_role_by_name(&self, name: &str) -> Result<Option<Role>> {
        debug!("Finding role by name: {}", name);

        let role_model = entities::Role::find()
            .filter(role::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(role_model.map(|model| model.to_domain()))
    }

    /// Find a role together with the permissions it grants
    pub async fn find_role_with_permissions(
        &self,
        role_id: Uuid,
    ) -> Result<Option<RoleWithPermissions>> {
        debug!("Finding role with permissions: {}", role_id);

        let Some(role_model) = entities::Role::find_by_id(role_id)
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?
        else {
            return Ok(None);
        };

        let permissions = role_model
            .find_related(entities::Permission)
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(Some(RoleWithPermissions {
            role: role_model.to_domain(),
            permissions: permissions.iter().map(|model| model.to_domain()).collect(),
        }))
    }

    /// List all roles
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        let roles = entities::Role::find()
            .order_by_asc(role::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(roles.iter().map(|model| model.to_domain()).collect())
    }

    /// List all roles together with the permissions they grant
    pub async fn list_roles_with_permissions(&self) -> Result<Vec<RoleWithPermissions>> {
        debug!("Listing roles with permissions");

        let rows = entities::Role::find()
            .find_with_related(entities::Permission)
            .order_by_asc(role::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(rows
            .into_iter()
            .map(|(role_model, permissions)| RoleWithPermissions {
                role: role_model.to_domain(),
                permissions: permissions.iter().map(|model| model.to_domain()).collect(),
            })
            .collect())
    }

    /// Create a role and its permission grants in one transaction
    pub async fn create_role(&self, new_role: &Role, permission_ids: &[Uuid]) -> Result<Role> {
        debug!("Creating role: {}", new_role.name);

        let txn = self.db.begin().await.map_err(AdminError::Database)?;

        entities::Role::insert(role::Model::from_domain(new_role))
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;

        let grants = permission_ids.iter().map(|pid| role_permission::ActiveModel {
            role_id: Set(new_role.id),
            permission_id: Set(*pid),
        });
        entities::RolePermission::insert_many(grants)
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;

        txn.commit().await.map_err(AdminError::Database)?;

        Ok(new_role.clone())
    }

    /// Replace a role's name and permission grants atomically
    ///
    /// The swap runs inside a single transaction, so a concurrent reader never
    /// observes the role with neither the old nor the new grant set.
    pub async fn replace_role(
        &self,
        role_id: Uuid,
        name: &str,
        permission_ids: &[Uuid],
    ) -> Result<()> {
        debug!("Replacing role: {}", role_id);

        let txn = self.db.begin().await.map_err(AdminError::Database)?;

        let mut role: role::ActiveModel = entities::Role::find_by_id(role_id)
            .one(&txn)
            .await
            .map_err(AdminError::Database)?
            .ok_or_else(|| AdminError::not_found("Role not found"))?
            .into();

        role.name = Set(name.to_string());
        role.updated_at = Set(chrono::Utc::now().into());
        role.update(&txn).await.map_err(AdminError::Database)?;

        entities::RolePermission::delete_many()
            .filter(role_permission::Column::RoleId.eq(role_id))
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;

        let grants = permission_ids.iter().map(|pid| role_permission::ActiveModel {
            role_id: Set(role_id),
            permission_id: Set(*pid),
        });
        entities::RolePermission::insert_many(grants)
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;

        txn.commit().await.map_err(AdminError::Database)?;

        Ok(())
    }

    /// Delete a role and its permission grants
    pub async fn delete_role(&self, role_id: Uuid) -> Result<()> {
        debug!("Deleting role: {}", role_id);

        let txn = self.db.begin().await.map_err(AdminError::Database)?;

        entities::RolePermission::delete_many()
            .filter(role_permission::Column::RoleId.eq(role_id))
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;

        let result = entities::Role::delete_by_id(role_id)
            .exec(&txn)
            .await
            .map_err(AdminError::Database)?;

        if result.rows_affected == 0 {
            return Err(AdminError::not_found("Role not found"));
        }

        txn.commit().await.map_err(AdminError::Database)?;

        Ok(())
    }

    /// Count roles referencing a permission
    pub async fn count_roles_with_permission(&self, permission_id: Uuid) -> Result<u64> {
        entities::RolePermission::find()
            .filter(role_permission::Column::PermissionId.eq(permission_id))
            .count(&self.db)
            .await
            .map_err(AdminError::Database)
    }
}
