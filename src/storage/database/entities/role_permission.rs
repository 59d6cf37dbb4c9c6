use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role-to-permission grant row
///
/// Composite primary key keeps a role's grant set free of duplicates.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "role_permissions")]
pub struct Model {
    /// Granting role ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: Uuid,

    /// Granted permission ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub permission_id: Uuid,
}

/// Grant row relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning role
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id"
    )]
    Role,

    /// Referenced permission
    #[sea_orm(
        belongs_to = "super::permission::Entity",
        from = "Column::PermissionId",
        to = "super::permission::Column::Id"
    )]
    Permission,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Permission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
