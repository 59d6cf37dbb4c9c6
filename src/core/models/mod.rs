//! Domain models

pub mod permission;
pub mod role;
pub mod user;

pub use permission::Permission;
pub use role::{Role, RoleWithPermissions};
pub use user::{User, UserWithRole};
