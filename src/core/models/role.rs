//! Role domain model

use super::permission::Permission;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named role that users reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role ID
    pub id: Uuid,
    /// Role name (unique)
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Create a new role with a fresh identity
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A role together with the permissions it grants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleWithPermissions {
    /// The role itself
    #[serde(flatten)]
    pub role: Role,
    /// Permissions granted by this role
    pub permissions: Vec<Permission>,
}

impl RoleWithPermissions {
    /// Check whether this role grants a permission by name
    pub fn grants(&self, permission_name: &str) -> bool {
        self.permissions.iter().any(|p| p.name == permission_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_grants_by_name() {
        let role = RoleWithPermissions {
            role: Role::new("editor".to_string()),
            permissions: vec![
                Permission::new("view".to_string()),
                Permission::new("edit".to_string()),
            ],
        };

        assert!(role.grants("view"));
        assert!(role.grants("edit"));
        assert!(!role.grants("create"));
    }
}
