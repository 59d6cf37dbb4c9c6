use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    /// Role ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Role name (unique)
    #[sea_orm(unique)]
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Role entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Permission grant rows owned by this role
    #[sea_orm(has_many = "super::role_permission::Entity")]
    RolePermissions,

    /// Users referencing this role
    #[sea_orm(has_many = "super::user::Entity")]
    Users,
}

impl Related<super::role_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolePermissions.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

// Many-to-many: roles reach permissions through the grant table
impl Related<super::permission::Entity> for Entity {
    fn to() -> RelationDef {
        super::role_permission::Relation::Permission.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::role_permission::Relation::Role.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion methods between SeaORM model and our domain model
impl Model {
    /// Convert SeaORM model to domain role model
    pub fn to_domain(&self) -> crate::core::models::Role {
        crate::core::models::Role {
            id: self.id,
            name: self.name.clone(),
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Convert domain role model to SeaORM active model
    pub fn from_domain(role: &crate::core::models::Role) -> ActiveModel {
        ActiveModel {
            id: Set(role.id),
            name: Set(role.name.clone()),
            created_at: Set(role.created_at.into()),
            updated_at: Set(role.updated_at.into()),
        }
    }
}
