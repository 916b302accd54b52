use chrono::{Duration, Utc};
use uuid::Uuid;

use transify_domain::admin::{AdminRole, AdminStatus, can_manage_admins};
use transify_domain::audit::AuditAction;

use crate::domain::repository::{
    AdminRepository, AuditLogRepository, InviteEmail, Mailer, OrganizationRepository,
};
use crate::domain::types::{AdminAccount, AuditLogEntry, INVITE_TTL_HOURS, default_display_name};
use crate::error::AdminServiceError;

/// Fallback organization name for the invite email when the org row cannot
/// be read. The invite itself does not depend on the lookup.
const DEFAULT_ORG_NAME: &str = "Your Organization";

pub struct InviteAdminInput {
    pub email: String,
    pub role: AdminRole,
    pub organization_id: Uuid,
    pub invited_by_user_id: Uuid,
}

#[derive(Debug)]
pub struct InviteAdminOutput {
    pub account: AdminAccount,
    pub accept_url: String,
    /// Set when the invite email could not be delivered. The invite record
    /// persists either way; the accept URL can be shared out-of-band.
    pub email_error: Option<String>,
}

pub struct InviteAdminUseCase<A, O, L, M>
where
    A: AdminRepository,
    O: OrganizationRepository,
    L: AuditLogRepository,
    M: Mailer,
{
    pub admins: A,
    pub orgs: O,
    pub audit: L,
    pub mailer: M,
    pub app_base_url: String,
}

impl<A, O, L, M> InviteAdminUseCase<A, O, L, M>
where
    A: AdminRepository,
    O: OrganizationRepository,
    L: AuditLogRepository,
    M: Mailer,
{
    pub async fn execute(
        &self,
        input: InviteAdminInput,
    ) -> Result<InviteAdminOutput, AdminServiceError> {
        // 1. Only a super admin may invite.
        let inviter = self
            .admins
            .find_by_id(input.invited_by_user_id)
            .await?
            .ok_or(AdminServiceError::NotSuperAdmin)?;
        if !can_manage_admins(inviter.role) {
            return Err(AdminServiceError::NotSuperAdmin);
        }

        let email = input.email.trim().to_lowercase();

        // 2. An active account blocks the invite; INVITED or DISABLED rows
        //    are overwritten in place (re-invite semantics).
        let existing = self
            .admins
            .find_by_email_and_org(&email, input.organization_id)
            .await?;
        if let Some(acc) = &existing {
            if acc.status == AdminStatus::Active {
                return Err(AdminServiceError::AlreadyActive);
            }
        }

        // 3. Fresh token and 48-hour expiry.
        let invite_token = Uuid::new_v4().to_string();
        let now = Utc::now();
        let expires_at = now + Duration::hours(INVITE_TTL_HOURS);

        let account = AdminAccount {
            id: existing.as_ref().map(|a| a.id).unwrap_or_else(Uuid::new_v4),
            name: default_display_name(&email),
            email: email.clone(),
            organization_id: input.organization_id,
            role: input.role,
            status: AdminStatus::Invited,
            invited_by: Some(inviter.id),
            invite_token: Some(invite_token.clone()),
            invite_expires_at: Some(expires_at),
            created_at: now,
            activated_at: None,
            last_active: None,
            disabled_at: None,
            disabled_by: None,
        };
        self.admins.upsert(&account).await?;

        // 4. Audit before the mail attempt; the invite exists regardless of
        //    delivery.
        self.audit
            .append(&AuditLogEntry {
                id: Uuid::new_v4(),
                action: AuditAction::AdminInviteSent,
                actor_id: inviter.id,
                actor_email: inviter.email.clone(),
                organization_id: input.organization_id,
                target_id: Some(account.id),
                details: Some(format!("invited {} as {}", email, input.role.as_str())),
                timestamp: now,
            })
            .await?;

        // 5. Org name for the email copy; lookup failure falls back.
        let organization_name = self
            .orgs
            .find_by_id(input.organization_id)
            .await
            .ok()
            .flatten()
            .map(|org| org.name)
            .unwrap_or_else(|| DEFAULT_ORG_NAME.to_owned());

        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("token", &invite_token)
            .append_pair("email", &email)
            .finish();
        let accept_url = format!(
            "{}/accept-invite?{}",
            self.app_base_url.trim_end_matches('/'),
            query
        );

        let mail = InviteEmail {
            to: email,
            organization_name,
            inviter_name: inviter.name.clone(),
            role: input.role,
            accept_url: accept_url.clone(),
        };
        let email_error = match self.mailer.send_invite(&mail).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, to = %mail.to, "invite email delivery failed");
                Some(e.to_string())
            }
        };

        Ok(InviteAdminOutput {
            account,
            accept_url,
            email_error,
        })
    }
}
