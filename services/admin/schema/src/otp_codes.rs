use sea_orm::entity::prelude::*;

/// One-time login code, at most one live row per email.
/// Keyed by lowercased email; a new send overwrites the previous row.
/// Expires 10 minutes after creation; single-use within that window.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "otp_codes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    /// Six digits, leading zeros preserved.
    pub otp: String,
    pub organization_id: Uuid,
    pub expires_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub used: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
