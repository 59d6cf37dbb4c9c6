//! User domain model

use super::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An account that can authenticate and hold one role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Password hash (never serialized outward)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Reference to the user's role, if any
    pub role_id: Option<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh identity
    pub fn new(name: String, email: String, password_hash: String, role_id: Option<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            role_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A user together with their resolved role, for listing screens
#[derive(Debug, Clone, Serialize)]
pub struct UserWithRole {
    /// The user itself
    #[serde(flatten)]
    pub user: User,
    /// The resolved role (None when unset or dangling)
    pub role: Option<Role>,
}
