//! Administrative mutation operations
//!
//! CRUD over users, roles, and permissions with their guard conditions:
//! uniqueness validation, reference checks before deletion, and the
//! self-deletion guard.

mod permissions;
mod roles;
mod seed;
pub mod users;

use crate::storage::StorageLayer;
use std::sync::Arc;

pub use seed::SEED_PERMISSIONS;
pub use users::NewUser;

/// Administrative operations over users, roles, and permissions
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Storage layer
    storage: Arc<StorageLayer>,
}

impl AdminService {
    /// Create a new admin service
    pub fn new(storage: Arc<StorageLayer>) -> Self {
        Self { storage }
    }

    /// Storage layer accessor for read paths
    pub(crate) fn db(&self) -> &crate::storage::database::Database {
        self.storage.db()
    }
}
