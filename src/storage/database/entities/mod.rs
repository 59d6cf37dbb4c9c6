//! SeaORM entity definitions

pub mod permission;
pub mod role;
pub mod role_permission;
pub mod user;

pub use permission::Entity as Permission;
pub use role::Entity as Role;
pub use role_permission::Entity as RolePermission;
pub use user::Entity as User;
