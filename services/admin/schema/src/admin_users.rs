use sea_orm::entity::prelude::*;

/// An admin's membership in exactly one organization.
///
/// `invite_token` and `invite_expires_at` are non-null only while status is
/// `INVITED`; cleared on activation. Disabled rows are retained with
/// `disabled_at`/`disabled_by`, never deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Lowercased; unique per organization among non-disabled rows.
    pub email: String,
    /// Defaults to the email local part until first login.
    pub name: String,
    pub organization_id: Uuid,
    /// `"ADMIN"` or `"SUPER_ADMIN"` — see `transify_domain::admin::AdminRole`.
    pub role: String,
    /// `"INVITED"`, `"ACTIVE"`, or `"DISABLED"`.
    pub status: String,
    pub invited_by: Option<Uuid>,
    pub invite_token: Option<String>,
    pub invite_expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub activated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub last_active: Option<chrono::DateTime<chrono::Utc>>,
    pub disabled_at: Option<chrono::DateTime<chrono::Utc>>,
    pub disabled_by: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organizations::Entity",
        from = "Column::OrganizationId",
        to = "super::organizations::Column::Id"
    )]
    Organization,
}

impl Related<super::organizations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
