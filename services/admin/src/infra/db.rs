use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use uuid::Uuid;

use transify_admin_schema::{admin_users, audit_logs, organizations, otp_codes};
use transify_domain::admin::{AdminRole, AdminStatus};
use transify_domain::audit::AuditAction;
use transify_domain::org::OrgCategory;

use crate::domain::repository::{
    AdminRepository, AuditLogRepository, OrganizationRepository, OtpRepository,
};
use crate::domain::types::{AdminAccount, AuditLogEntry, OneTimeCode, Organization};
use crate::error::AdminServiceError;

// Prefix search as a range scan: from the prefix up to the prefix extended
// with a high sentinel codepoint.
const PREFIX_SCAN_SENTINEL: char = '\u{f8ff}';

// ── Organization repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrganizationRepository {
    pub db: DatabaseConnection,
}

impl OrganizationRepository for DbOrganizationRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>, AdminServiceError> {
        let model = organizations::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find organization by id")?;
        model.map(org_from_model).transpose()
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Organization>, AdminServiceError> {
        let model = organizations::Entity::find()
            .filter(organizations::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find organization by code")?;
        model.map(org_from_model).transpose()
    }

    async fn search_by_name_prefix(
        &self,
        prefix: &str,
        limit: u64,
    ) -> Result<Vec<Organization>, AdminServiceError> {
        let upper = format!("{prefix}{PREFIX_SCAN_SENTINEL}");
        let models = organizations::Entity::find()
            .filter(organizations::Column::Name.gte(prefix))
            .filter(organizations::Column::Name.lte(upper))
            .order_by_asc(organizations::Column::Name)
            .limit(limit)
            .all(&self.db)
            .await
            .context("search organizations by name prefix")?;
        models.into_iter().map(org_from_model).collect()
    }
}

fn org_from_model(model: organizations::Model) -> Result<Organization, AdminServiceError> {
    let category = OrgCategory::from_str_wire(&model.category)
        .ok_or_else(|| anyhow::anyhow!("unknown organization category: {}", model.category))?;
    Ok(Organization {
        id: model.id,
        name: model.name,
        code: model.code,
        category,
        address: model.address,
        member_count: model.member_count,
        created_at: model.created_at,
    })
}

// ── Admin repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminRepository {
    pub db: DatabaseConnection,
}

impl AdminRepository for DbAdminRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminAccount>, AdminServiceError> {
        let model = admin_users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find admin by id")?;
        model.map(admin_from_model).transpose()
    }

    async fn find_by_email_and_org(
        &self,
        email: &str,
        organization_id: Uuid,
    ) -> Result<Option<AdminAccount>, AdminServiceError> {
        let model = admin_users::Entity::find()
            .filter(admin_users::Column::Email.eq(email))
            .filter(admin_users::Column::OrganizationId.eq(organization_id))
            .one(&self.db)
            .await
            .context("find admin by email and org")?;
        model.map(admin_from_model).transpose()
    }

    async fn find_by_invite_token(
        &self,
        token: &str,
        email: &str,
    ) -> Result<Option<AdminAccount>, AdminServiceError> {
        let model = admin_users::Entity::find()
            .filter(admin_users::Column::InviteToken.eq(token))
            .filter(admin_users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find admin by invite token")?;
        model.map(admin_from_model).transpose()
    }

    async fn find_active_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, AdminServiceError> {
        let model = admin_users::Entity::find()
            .filter(admin_users::Column::Email.eq(email))
            .filter(admin_users::Column::Status.eq(AdminStatus::Active.as_str()))
            .one(&self.db)
            .await
            .context("find active admin by email")?;
        model.map(admin_from_model).transpose()
    }

    async fn list_by_org(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<AdminAccount>, AdminServiceError> {
        let models = admin_users::Entity::find()
            .filter(admin_users::Column::OrganizationId.eq(organization_id))
            .order_by_desc(admin_users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list admins by org")?;
        models.into_iter().map(admin_from_model).collect()
    }

    async fn upsert(&self, account: &AdminAccount) -> Result<(), AdminServiceError> {
        let model = admin_users::ActiveModel {
            id: Set(account.id),
            email: Set(account.email.clone()),
            name: Set(account.name.clone()),
            organization_id: Set(account.organization_id),
            role: Set(account.role.as_str().to_owned()),
            status: Set(account.status.as_str().to_owned()),
            invited_by: Set(account.invited_by),
            invite_token: Set(account.invite_token.clone()),
            invite_expires_at: Set(account.invite_expires_at),
            created_at: Set(account.created_at),
            activated_at: Set(account.activated_at),
            last_active: Set(account.last_active),
            disabled_at: Set(account.disabled_at),
            disabled_by: Set(account.disabled_by),
        };
        admin_users::Entity::insert(model)
            .on_conflict(
                OnConflict::column(admin_users::Column::Id)
                    .update_columns([
                        admin_users::Column::Email,
                        admin_users::Column::Name,
                        admin_users::Column::OrganizationId,
                        admin_users::Column::Role,
                        admin_users::Column::Status,
                        admin_users::Column::InvitedBy,
                        admin_users::Column::InviteToken,
                        admin_users::Column::InviteExpiresAt,
                        admin_users::Column::CreatedAt,
                        admin_users::Column::ActivatedAt,
                        admin_users::Column::LastActive,
                        admin_users::Column::DisabledAt,
                        admin_users::Column::DisabledBy,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .context("upsert admin")?;
        Ok(())
    }

    async fn activate(&self, id: Uuid, now: DateTime<Utc>) -> Result<(), AdminServiceError> {
        admin_users::ActiveModel {
            id: Set(id),
            status: Set(AdminStatus::Active.as_str().to_owned()),
            invite_token: Set(None),
            invite_expires_at: Set(None),
            activated_at: Set(Some(now)),
            last_active: Set(Some(now)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("activate admin")?;
        Ok(())
    }

    async fn change_role(&self, id: Uuid, role: AdminRole) -> Result<(), AdminServiceError> {
        admin_users::ActiveModel {
            id: Set(id),
            role: Set(role.as_str().to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("change admin role")?;
        Ok(())
    }

    async fn disable(
        &self,
        id: Uuid,
        disabled_by: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), AdminServiceError> {
        // Clears any pending invite as well: only INVITED rows carry a token.
        admin_users::ActiveModel {
            id: Set(id),
            status: Set(AdminStatus::Disabled.as_str().to_owned()),
            invite_token: Set(None),
            invite_expires_at: Set(None),
            disabled_at: Set(Some(now)),
            disabled_by: Set(Some(disabled_by)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("disable admin")?;
        Ok(())
    }

    async fn touch_last_active(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), AdminServiceError> {
        admin_users::ActiveModel {
            id: Set(id),
            last_active: Set(Some(now)),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("touch admin last_active")?;
        Ok(())
    }

    async fn update_name(&self, id: Uuid, name: &str) -> Result<(), AdminServiceError> {
        admin_users::ActiveModel {
            id: Set(id),
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update admin name")?;
        Ok(())
    }
}

fn admin_from_model(model: admin_users::Model) -> Result<AdminAccount, AdminServiceError> {
    let role = AdminRole::from_str_wire(&model.role)
        .ok_or_else(|| anyhow::anyhow!("unknown admin role: {}", model.role))?;
    let status = AdminStatus::from_str_wire(&model.status)
        .ok_or_else(|| anyhow::anyhow!("unknown admin status: {}", model.status))?;
    Ok(AdminAccount {
        id: model.id,
        email: model.email,
        name: model.name,
        organization_id: model.organization_id,
        role,
        status,
        invited_by: model.invited_by,
        invite_token: model.invite_token,
        invite_expires_at: model.invite_expires_at,
        created_at: model.created_at,
        activated_at: model.activated_at,
        last_active: model.last_active,
        disabled_at: model.disabled_at,
        disabled_by: model.disabled_by,
    })
}

// ── OTP repository ───────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbOtpRepository {
    async fn put(&self, code: &OneTimeCode) -> Result<(), AdminServiceError> {
        let model = otp_codes::ActiveModel {
            email: Set(code.email.clone()),
            otp: Set(code.otp.clone()),
            organization_id: Set(code.organization_id),
            expires_at: Set(code.expires_at),
            created_at: Set(code.created_at),
            used: Set(code.used),
        };
        // Single atomic write: one live code per email, a new send replaces
        // the old row entirely.
        otp_codes::Entity::insert(model)
            .on_conflict(
                OnConflict::column(otp_codes::Column::Email)
                    .update_columns([
                        otp_codes::Column::Otp,
                        otp_codes::Column::OrganizationId,
                        otp_codes::Column::ExpiresAt,
                        otp_codes::Column::CreatedAt,
                        otp_codes::Column::Used,
                    ])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .context("put otp code")?;
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<OneTimeCode>, AdminServiceError> {
        let model = otp_codes::Entity::find_by_id(email.to_owned())
            .one(&self.db)
            .await
            .context("find otp code by email")?;
        Ok(model.map(otp_from_model))
    }

    async fn mark_used(&self, email: &str) -> Result<(), AdminServiceError> {
        otp_codes::ActiveModel {
            email: Set(email.to_owned()),
            used: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark otp code used")?;
        Ok(())
    }
}

fn otp_from_model(model: otp_codes::Model) -> OneTimeCode {
    OneTimeCode {
        email: model.email,
        otp: model.otp,
        organization_id: model.organization_id,
        expires_at: model.expires_at,
        created_at: model.created_at,
        used: model.used,
    }
}

// ── Audit log repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuditLogRepository {
    pub db: DatabaseConnection,
}

impl AuditLogRepository for DbAuditLogRepository {
    async fn append(&self, entry: &AuditLogEntry) -> Result<(), AdminServiceError> {
        audit_logs::ActiveModel {
            id: Set(entry.id),
            action: Set(entry.action.as_str().to_owned()),
            actor_id: Set(entry.actor_id),
            actor_email: Set(entry.actor_email.clone()),
            organization_id: Set(entry.organization_id),
            target_id: Set(entry.target_id),
            details: Set(entry.details.clone()),
            timestamp: Set(entry.timestamp),
        }
        .insert(&self.db)
        .await
        .context("append audit log entry")?;
        Ok(())
    }

    async fn list_by_org(
        &self,
        organization_id: Uuid,
        limit: u64,
    ) -> Result<Vec<AuditLogEntry>, AdminServiceError> {
        let models = audit_logs::Entity::find()
            .filter(audit_logs::Column::OrganizationId.eq(organization_id))
            .order_by_desc(audit_logs::Column::Timestamp)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list audit log entries")?;
        models.into_iter().map(audit_from_model).collect()
    }
}

fn audit_from_model(model: audit_logs::Model) -> Result<AuditLogEntry, AdminServiceError> {
    let action = AuditAction::from_str_wire(&model.action)
        .ok_or_else(|| anyhow::anyhow!("unknown audit action: {}", model.action))?;
    Ok(AuditLogEntry {
        id: model.id,
        action,
        actor_id: model.actor_id,
        actor_email: model.actor_email,
        organization_id: model.organization_id,
        target_id: model.target_id,
        details: model.details,
        timestamp: model.timestamp,
    })
}
