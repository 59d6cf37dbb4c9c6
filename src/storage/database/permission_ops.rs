use crate::core::models::Permission;
use crate::utils::error::{AdminError, Result};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::debug;
use uuid::Uuid;

use super::Database;
use super::entities::{self, permission};

impl Database {
    /// Find permission by ID
    pub async fn find_permission_by_id(&self, permission_id: Uuid) -> Result<Option<Permission>> {
        debug!("Finding permission by ID: {}", permission_id);

        let model = entities::Permission::find_by_id(permission_id)
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(model.map(|model| model.to_domain()))
    }

    /// Find permission by name
    pub async fn find_permission_by_name(&self, name: &str) -> Result<Option<Permission>> {
        debug!("Finding permission by name: {}", name);

        let model = entities::Permission::find()
            .filter(permission::Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(model.map(|model| model.to_domain()))
    }

    /// Resolve a set of permission IDs, preserving only those that exist
    pub async fn find_permissions_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Permission>> {
        let models = entities::Permission::find()
            .filter(permission::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(models.iter().map(|model| model.to_domain()).collect())
    }

    /// List all permissions
    pub async fn list_permissions(&self) -> Result<Vec<Permission>> {
        let models = entities::Permission::find()
            .order_by_asc(permission::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(models.iter().map(|model| model.to_domain()).collect())
    }

    /// Count all permissions
    pub async fn count_permissions(&self) -> Result<u64> {
        entities::Permission::find()
            .count(&self.db)
            .await
            .map_err(AdminError::Database)
    }

    /// Create a new permission
    pub async fn create_permission(&self, new_permission: &Permission) -> Result<Permission> {
        debug!("Creating permission: {}", new_permission.name);

        entities::Permission::insert(permission::Model::from_domain(new_permission))
            .exec(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(new_permission.clone())
    }

    /// Delete a permission
    pub async fn delete_permission(&self, permission_id: Uuid) -> Result<()> {
        debug!("Deleting permission: {}", permission_id);

        let result = entities::Permission::delete_by_id(permission_id)
            .exec(&self.db)
            .await
            .map_err(AdminError::Database)?;

        if result.rows_affected == 0 {
            return Err(AdminError::not_found("Permission not found"));
        }

        Ok(())
    }
}
