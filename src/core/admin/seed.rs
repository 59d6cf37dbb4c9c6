//! Bootstrap seeding
//!
//! Creates the initial permissions (`view`, `create`, `edit`), the `admin`
//! and `user` roles, and an initial admin account. Runs only against an
//! empty permission store.

use crate::config::SeedConfig;
use crate::core::models::{Permission, Role, User};
use crate::utils::crypto::hash_password;
use crate::utils::error::Result;
use tracing::{debug, info};

use super::AdminService;

pub const SEED_PERMISSIONS: [&str; 3] = ["view", "create", "edit"];

impl AdminService {
    /// Seed the store with default permissions, roles, and an admin account
    pub async fn bootstrap(&self, config: &SeedConfig) -> Result<()> {
        if !config.enabled {
            debug!("Bootstrap seeding disabled");
            return Ok(());
        }

        if self.db().count_permissions().await? > 0 {
            debug!("Store already seeded, skipping bootstrap");
            return Ok(());
        }

        info!("Seeding default permissions and roles");

        let mut permission_ids = Vec::new();
        for name in SEED_PERMISSIONS {
            let permission = self
                .db()
                .create_permission(&Permission::new(name.to_string()))
                .await?;
            permission_ids.push(permission.id);
        }

        let admin_role = self
            .db()
            .create_role(&Role::new("admin".to_string()), &permission_ids)
            .await?;

        // The user role only grants `view`
        self.db()
            .create_role(&Role::new("user".to_string()), &permission_ids[..1])
            .await?;

        if self
            .db()
            .find_user_by_email(&config.admin_email)
            .await?
            .is_none()
        {
            let password_hash = hash_password(&config.admin_password)?;
            self.db()
                .create_user(&User::new(
                    config.admin_name.clone(),
                    config.admin_email.to_lowercase(),
                    password_hash,
                    Some(admin_role.id),
                ))
                .await?;
            info!("Seeded admin account: {}", config.admin_email);
        }

        info!("Bootstrap seeding completed");
        Ok(())
    }
}
