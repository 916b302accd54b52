#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use transify_domain::admin::AdminRole;

use crate::domain::types::{AdminAccount, AuditLogEntry, OneTimeCode, Organization};
use crate::error::AdminServiceError;

/// Read-only directory of tenant organizations.
pub trait OrganizationRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Organization>, AdminServiceError>;

    /// Exact match on the (uppercase) join code. Callers normalize casing.
    async fn find_by_code(&self, code: &str) -> Result<Option<Organization>, AdminServiceError>;

    /// Case-sensitive name-prefix scan, ordered by name, capped at `limit`.
    async fn search_by_name_prefix(
        &self,
        prefix: &str,
        limit: u64,
    ) -> Result<Vec<Organization>, AdminServiceError>;
}

/// Repository for admin accounts. Emails are lowercased by callers.
pub trait AdminRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminAccount>, AdminServiceError>;

    async fn find_by_email_and_org(
        &self,
        email: &str,
        organization_id: Uuid,
    ) -> Result<Option<AdminAccount>, AdminServiceError>;

    /// Exact (invite_token, email) match, the accept-invite lookup.
    async fn find_by_invite_token(
        &self,
        token: &str,
        email: &str,
    ) -> Result<Option<AdminAccount>, AdminServiceError>;

    /// The account for `email` with status `ACTIVE`, if any.
    async fn find_active_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, AdminServiceError>;

    /// All accounts of the organization, newest first by creation time.
    async fn list_by_org(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<AdminAccount>, AdminServiceError>;

    /// Insert the account, or overwrite every field of the row with the same
    /// id (re-invite semantics).
    async fn upsert(&self, account: &AdminAccount) -> Result<(), AdminServiceError>;

    /// Transition to `ACTIVE`: clears the invite token and expiry, stamps
    /// `activated_at` and `last_active`.
    async fn activate(&self, id: Uuid, now: DateTime<Utc>) -> Result<(), AdminServiceError>;

    async fn change_role(&self, id: Uuid, role: AdminRole) -> Result<(), AdminServiceError>;

    /// Transition to `DISABLED`, retaining the row with actor and timestamp.
    async fn disable(
        &self,
        id: Uuid,
        disabled_by: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), AdminServiceError>;

    async fn touch_last_active(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(), AdminServiceError>;

    async fn update_name(&self, id: Uuid, name: &str) -> Result<(), AdminServiceError>;
}

/// Repository for one-time login codes, keyed by lowercased email.
pub trait OtpRepository: Send + Sync {
    /// Insert or overwrite the single row for `code.email`.
    async fn put(&self, code: &OneTimeCode) -> Result<(), AdminServiceError>;

    async fn find_by_email(&self, email: &str)
    -> Result<Option<OneTimeCode>, AdminServiceError>;

    /// Mark the code for `email` as used (single-use enforcement).
    async fn mark_used(&self, email: &str) -> Result<(), AdminServiceError>;
}

/// Append-only audit trail.
pub trait AuditLogRepository: Send + Sync {
    async fn append(&self, entry: &AuditLogEntry) -> Result<(), AdminServiceError>;

    /// Entries for the organization, newest first, capped at `limit`.
    async fn list_by_org(
        &self,
        organization_id: Uuid,
        limit: u64,
    ) -> Result<Vec<AuditLogEntry>, AdminServiceError>;
}

/// Invite email payload handed to the mailer.
#[derive(Debug, Clone)]
pub struct InviteEmail {
    pub to: String,
    pub organization_name: String,
    pub inviter_name: String,
    pub role: AdminRole,
    pub accept_url: String,
}

/// Port for outbound email. Errors are soft: callers log and report them,
/// the primary record is the source of truth regardless of delivery.
pub trait Mailer: Send + Sync {
    async fn send_invite(&self, mail: &InviteEmail) -> anyhow::Result<()>;

    async fn send_otp(&self, to: &str, otp: &str) -> anyhow::Result<()>;
}
