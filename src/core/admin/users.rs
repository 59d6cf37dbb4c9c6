//! User mutation operations

use crate::core::models::{User, UserWithRole};
use crate::utils::crypto::{hash_password, validate_password_strength};
use crate::utils::error::{AdminError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;
use uuid::Uuid;

use super::AdminService;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Parameters for creating a user
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Password confirmation
    pub password_confirmation: String,
    /// Role to assign
    pub role_id: Uuid,
}

impl AdminService {
    /// List all users together with their resolved roles
    pub async fn list_users(&self) -> Result<Vec<UserWithRole>> {
        self.db().list_users_with_roles().await
    }

    /// Count all users
    pub async fn count_users(&self) -> Result<u64> {
        self.db().count_users().await
    }

    /// Create a user with a unique email, a strong password, and a valid role
    pub async fn create_user(&self, new_user: NewUser) -> Result<User> {
        let name = new_user.name.trim();
        if name.is_empty() {
            return Err(AdminError::validation("Name is required"));
        }

        let email = new_user.email.trim().to_lowercase();
        if !EMAIL_RE.is_match(&email) {
            return Err(AdminError::validation("Email address is invalid"));
        }
        if self.db().find_user_by_email(&email).await?.is_some() {
            return Err(AdminError::validation(format!(
                "Email '{}' is already taken",
                email
            )));
        }

        validate_password_strength(&new_user.password)?;
        if new_user.password != new_user.password_confirmation {
            return Err(AdminError::validation(
                "Password confirmation does not match",
            ));
        }

        if self.db().find_role_by_id(new_user.role_id).await?.is_none() {
            return Err(AdminError::validation("Selected role does not exist"));
        }

        let password_hash = hash_password(&new_user.password)?;
        let user = self
            .db()
            .create_user(&User::new(
                name.to_string(),
                email,
                password_hash,
                Some(new_user.role_id),
            ))
            .await?;

        info!("User created: {} ({})", user.email, user.id);
        Ok(user)
    }

    /// Replace a user's role reference
    ///
    /// Takes effect for subsequent permission checks immediately; nothing
    /// downstream caches the old role.
    pub async fn reassign_role(&self, user_id: Uuid, role_id: Uuid) -> Result<()> {
        let user = self
            .db()
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| AdminError::not_found("User not found"))?;

        if self.db().find_role_by_id(role_id).await?.is_none() {
            return Err(AdminError::validation("Selected role does not exist"));
        }

        self.db().update_user_role(user_id, role_id).await?;

        info!("User role reassigned: {} -> role {}", user.email, role_id);
        Ok(())
    }

    /// Delete a user, rejecting self-deletion by the acting principal
    pub async fn delete_user(&self, acting: &User, target_id: Uuid) -> Result<()> {
        if acting.id == target_id {
            return Err(AdminError::Forbidden(
                "You cannot delete your own account through this operation".to_string(),
            ));
        }

        let target = self
            .db()
            .find_user_by_id(target_id)
            .await?
            .ok_or_else(|| AdminError::not_found("User not found"))?;

        self.db().delete_user(target_id).await?;

        info!("User deleted: {} ({})", target.email, target.id);
        Ok(())
    }
}
