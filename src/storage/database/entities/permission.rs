use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Permission database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "permissions")]
pub struct Model {
    /// Permission ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Permission name (unique)
    #[sea_orm(unique)]
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// Permission entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Role grant rows referencing this permission
    #[sea_orm(has_many = "super::role_permission::Entity")]
    RolePermissions,
}

impl Related<super::role_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolePermissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain permission model
    pub fn to_domain(&self) -> crate::core::models::Permission {
        crate::core::models::Permission {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain permission model to SeaORM active model
    pub fn from_domain(permission: &crate::core::models::Permission) -> ActiveModel {
        ActiveModel {
            id: Set(permission.id),
            name: Set(permission.name.clone()),
            created_at: Set(permission.created_at.into()),
        }
    }
}
