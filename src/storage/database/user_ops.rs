use crate::core::models::{User, UserWithRole};
use crate::utils::error::{AdminError, Result};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use tracing::debug;
use uuid::Uuid;

use super::Database;
use super::entities::{self, user};

impl Database {
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: Uuid) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(user_model.map(|model| model.to_domain()))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(user_model.map(|model| model.to_domain()))
    }

    /// List all users together with their resolved roles
    pub async fn list_users_with_roles(&self) -> Result<Vec<UserWithRole>> {
        debug!("Listing users with roles");

        let rows = entities::User::find()
            .find_also_related(entities::Role)
            .order_by_asc(user::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(rows
            .into_iter()
            .map(|(user_model, role_model)| UserWithRole {
                user: user_model.to_domain(),
                role: role_model.map(|model| model.to_domain()),
            })
            .collect())
    }

    /// Create a new user
    pub async fn create_user(&self, user: &User) -> Result<User> {
        debug!("Creating user: {}", user.email);

        let active_model = user::Model::from_domain(user);

        entities::User::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(AdminError::Database)?;

        Ok(user.clone())
    }

    /// Replace a user's role reference
    pub async fn update_user_role(&self, user_id: Uuid, role_id: Uuid) -> Result<()> {
        debug!("Updating role for user: {}", user_id);

        let mut user: user::ActiveModel = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AdminError::Database)?
            .ok_or_else(|| AdminError::not_found("User not found"))?
            .into();

        user.role_id = Set(Some(role_id));
        user.updated_at = Set(chrono::Utc::now().into());

        user.update(&self.db).await.map_err(AdminError::Database)?;

        Ok(())
    }

    /// Delete a user
    pub async fn delete_user(&self, user_id: Uuid) -> Result<()> {
        debug!("Deleting user: {}", user_id);

        let result = entities::User::delete_by_id(user_id)
            .exec(&self.db)
            .await
            .map_err(AdminError::Database)?;

        if result.rows_affected == 0 {
            return Err(AdminError::not_found("User not found"));
        }

        Ok(())
    }

    /// Count all users
    pub async fn count_users(&self) -> Result<u64> {
        entities::User::find()
            .count(&self.db)
            .await
            .map_err(AdminError::Database)
    }

    /// Count users referencing a role
    pub async fn count_users_with_role(&self, role_id: Uuid) -> Result<u64> {
        entities::User::find()
            .filter(user::Column::RoleId.eq(role_id))
            .count(&self.db)
            .await
            .map_err(AdminError::Database)
    }
}
