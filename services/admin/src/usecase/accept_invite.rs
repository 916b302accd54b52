use chrono::Utc;
use uuid::Uuid;

use transify_domain::admin::AdminStatus;
use transify_domain::audit::AuditAction;

use crate::domain::repository::{AdminRepository, AuditLogRepository};
use crate::domain::types::AuditLogEntry;
use crate::error::AdminServiceError;

// ── AcceptInvite ─────────────────────────────────────────────────────────────

pub struct AcceptInviteInput {
    pub token: String,
    pub email: String,
}

#[derive(Debug)]
pub struct AcceptInviteOutput {
    pub organization_id: Uuid,
    /// True when the account was already active: the call is an idempotent
    /// no-op rather than an error, so a re-clicked email link stays friendly.
    pub already_active: bool,
}

pub struct AcceptInviteUseCase<A: AdminRepository, L: AuditLogRepository> {
    pub admins: A,
    pub audit: L,
}

impl<A: AdminRepository, L: AuditLogRepository> AcceptInviteUseCase<A, L> {
    pub async fn execute(
        &self,
        input: AcceptInviteInput,
    ) -> Result<AcceptInviteOutput, AdminServiceError> {
        let email = input.email.trim().to_lowercase();

        // 1. Exact (token, email) match. Activation clears the token, so a
        //    second accept lands in the fallback below.
        let account = match self.admins.find_by_invite_token(&input.token, &email).await? {
            Some(account) => account,
            None => {
                // Already-activated account for this email: idempotent success.
                if let Some(active) = self.admins.find_active_by_email(&email).await? {
                    return Ok(AcceptInviteOutput {
                        organization_id: active.organization_id,
                        already_active: true,
                    });
                }
                return Err(AdminServiceError::InviteNotFound);
            }
        };

        // 2. A row that is somehow active while still holding its token is
        //    treated the same as the fallback above.
        if account.status == AdminStatus::Active {
            return Ok(AcceptInviteOutput {
                organization_id: account.organization_id,
                already_active: true,
            });
        }

        // 3. Expiry gate.
        let now = Utc::now();
        if account.invite_expired(now) {
            return Err(AdminServiceError::InviteExpired);
        }

        // 4. Activate: status ACTIVE, token and expiry cleared.
        self.admins.activate(account.id, now).await?;

        self.audit
            .append(&AuditLogEntry {
                id: Uuid::new_v4(),
                action: AuditAction::AdminInviteAccepted,
                actor_id: account.id,
                actor_email: email.clone(),
                organization_id: account.organization_id,
                target_id: None,
                details: Some(format!("{} accepted invite as {}", email, account.role.as_str())),
                timestamp: now,
            })
            .await?;

        Ok(AcceptInviteOutput {
            organization_id: account.organization_id,
            already_active: false,
        })
    }
}

// ── UpdateDisplayName ────────────────────────────────────────────────────────

pub struct UpdateDisplayNameUseCase<A: AdminRepository> {
    pub admins: A,
}

impl<A: AdminRepository> UpdateDisplayNameUseCase<A> {
    /// One-time convenience write after the first login; only active
    /// accounts can be renamed.
    pub async fn execute(&self, email: &str, name: &str) -> Result<(), AdminServiceError> {
        let email = email.trim().to_lowercase();
        let account = self
            .admins
            .find_active_by_email(&email)
            .await?
            .ok_or(AdminServiceError::AdminNotFound)?;
        self.admins.update_name(account.id, name.trim()).await
    }
}
