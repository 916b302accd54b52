use sea_orm::entity::prelude::*;

/// A tenant (school or company). Seeded by the provisioning process;
/// immutable within this service.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// Human-readable join code, stored uppercase.
    #[sea_orm(unique)]
    pub code: String,
    /// `"school"` or `"corporate"` — see `transify_domain::org::OrgCategory`.
    pub category: String,
    pub address: Option<String>,
    pub member_count: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::admin_users::Entity")]
    AdminUsers,
}

impl Related<super::admin_users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdminUsers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
