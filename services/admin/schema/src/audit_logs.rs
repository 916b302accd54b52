use sea_orm::entity::prelude::*;

/// Append-only record of a privileged action. Never updated or deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// See `transify_domain::audit::AuditAction` for the tag set.
    pub action: String,
    pub actor_id: Uuid,
    pub actor_email: String,
    pub organization_id: Uuid,
    pub target_id: Option<Uuid>,
    pub details: Option<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
