use chrono::{Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use transify_domain::admin::AdminStatus;
use transify_domain::audit::AuditAction;

use crate::domain::repository::{
    AdminRepository, AuditLogRepository, Mailer, OrganizationRepository, OtpRepository,
};
use crate::domain::types::{AdminAccount, AuditLogEntry, OTP_TTL_MINS, OneTimeCode, Organization};
use crate::error::AdminServiceError;
use crate::usecase::session::issue_session_token;

/// Uniformly random six-digit code, leading zeros preserved.
fn generate_otp() -> String {
    let mut rng = rand::rng();
    format!("{:06}", rng.random_range(0..1_000_000u32))
}

// ── SendOtp ──────────────────────────────────────────────────────────────────

pub struct SendOtpInput {
    pub email: String,
    pub organization_id: Uuid,
}

#[derive(Debug)]
pub struct SendOtpOutput {
    /// Set when the code email could not be delivered. The code is stored
    /// and valid regardless.
    pub email_error: Option<String>,
}

pub struct SendOtpUseCase<A, C, M>
where
    A: AdminRepository,
    C: OtpRepository,
    M: Mailer,
{
    pub admins: A,
    pub otps: C,
    pub mailer: M,
}

impl<A, C, M> SendOtpUseCase<A, C, M>
where
    A: AdminRepository,
    C: OtpRepository,
    M: Mailer,
{
    pub async fn execute(&self, input: SendOtpInput) -> Result<SendOtpOutput, AdminServiceError> {
        let email = input.email.trim().to_lowercase();

        // 1. Only invited admins of this organization may request a code.
        let account = self
            .admins
            .find_by_email_and_org(&email, input.organization_id)
            .await?
            .ok_or(AdminServiceError::NotAuthorizedForOrg)?;
        if account.status == AdminStatus::Disabled {
            return Err(AdminServiceError::AccountDisabled);
        }

        // 2. Overwrite any prior live code for this email.
        let now = Utc::now();
        let code = OneTimeCode {
            email: email.clone(),
            otp: generate_otp(),
            organization_id: input.organization_id,
            expires_at: now + Duration::minutes(OTP_TTL_MINS),
            created_at: now,
            used: false,
        };
        self.otps.put(&code).await?;

        // Surfaced at debug level so the code is retrievable without a
        // working mailer in non-production setups.
        tracing::debug!(email = %code.email, otp = %code.otp, "issued login code");

        let email_error = match self.mailer.send_otp(&email, &code.otp).await {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, to = %email, "otp email delivery failed");
                Some(e.to_string())
            }
        };

        Ok(SendOtpOutput { email_error })
    }
}

// ── VerifyOtp ────────────────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub email: String,
    pub otp: String,
    pub organization_id: Uuid,
}

#[derive(Debug)]
pub struct VerifyOtpOutput {
    pub token: String,
    /// True when the display name is still the email-derived default, so the
    /// UI can prompt for a real name.
    pub is_first_login: bool,
    pub account: AdminAccount,
    pub organization: Option<Organization>,
}

pub struct VerifyOtpUseCase<A, O, C, L>
where
    A: AdminRepository,
    O: OrganizationRepository,
    C: OtpRepository,
    L: AuditLogRepository,
{
    pub admins: A,
    pub orgs: O,
    pub otps: C,
    pub audit: L,
    pub jwt_secret: String,
}

impl<A, O, C, L> VerifyOtpUseCase<A, O, C, L>
where
    A: AdminRepository,
    O: OrganizationRepository,
    C: OtpRepository,
    L: AuditLogRepository,
{
    pub async fn execute(
        &self,
        input: VerifyOtpInput,
    ) -> Result<VerifyOtpOutput, AdminServiceError> {
        let email = input.email.trim().to_lowercase();
        let now = Utc::now();

        // 1. Each rejection is distinct and checked in this order: missing
        //    record, spent code, expired code, wrong code, wrong tenant.
        let record = self
            .otps
            .find_by_email(&email)
            .await?
            .ok_or(AdminServiceError::OtpNotFound)?;
        if record.used {
            return Err(AdminServiceError::OtpUsed);
        }
        if record.is_expired(now) {
            return Err(AdminServiceError::OtpExpired);
        }
        if record.otp != input.otp {
            return Err(AdminServiceError::OtpMismatch);
        }
        if record.organization_id != input.organization_id {
            return Err(AdminServiceError::OtpOrgMismatch);
        }

        // 2. Spend the code before any further work; single-use even inside
        //    the validity window.
        self.otps.mark_used(&email).await?;

        let mut account = self
            .admins
            .find_by_email_and_org(&email, input.organization_id)
            .await?
            .ok_or(AdminServiceError::AdminNotFound)?;

        let is_first_login = account.has_default_name();

        // 3. First successful login activates an invited account.
        if account.status == AdminStatus::Invited {
            self.admins.activate(account.id, now).await?;
            account.status = AdminStatus::Active;
            account.invite_token = None;
            account.invite_expires_at = None;
            account.activated_at = Some(now);
        }
        self.admins.touch_last_active(account.id, now).await?;
        account.last_active = Some(now);

        let token = issue_session_token(&account, &self.jwt_secret)?;

        self.audit
            .append(&AuditLogEntry {
                id: Uuid::new_v4(),
                action: AuditAction::AdminLogin,
                actor_id: account.id,
                actor_email: email,
                organization_id: input.organization_id,
                target_id: None,
                details: Some(format!(
                    "admin {} logged in with role {}",
                    account.name,
                    account.role.as_str()
                )),
                timestamp: now,
            })
            .await?;

        let organization = self.orgs.find_by_id(input.organization_id).await?;

        Ok(VerifyOtpOutput {
            token,
            is_first_login,
            account,
            organization,
        })
    }
}
