use chrono::{DateTime, Utc};
use uuid::Uuid;

use transify_domain::admin::{AdminRole, AdminStatus};
use transify_domain::audit::AuditAction;
use transify_domain::org::OrgCategory;

/// A tenant as seen by this service. Seeded externally, read-only here.
#[derive(Debug, Clone)]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    /// Uppercase join code, unique across tenants.
    pub code: String,
    pub category: OrgCategory,
    pub address: Option<String>,
    pub member_count: i32,
    pub created_at: DateTime<Utc>,
}

/// An admin's membership in exactly one organization.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub id: Uuid,
    /// Always lowercased before storage or lookup.
    pub email: String,
    pub name: String,
    pub organization_id: Uuid,
    pub role: AdminRole,
    pub status: AdminStatus,
    pub invited_by: Option<Uuid>,
    /// Present only while status is `Invited`.
    pub invite_token: Option<String>,
    pub invite_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub activated_at: Option<DateTime<Utc>>,
    pub last_active: Option<DateTime<Utc>>,
    pub disabled_at: Option<DateTime<Utc>>,
    pub disabled_by: Option<Uuid>,
}

impl AdminAccount {
    /// Whether the pending invite has lapsed. An account without an expiry
    /// (already activated) is never considered expired.
    pub fn invite_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.invite_expires_at, Some(expires) if expires < now)
    }

    /// True until the admin replaces the email-derived placeholder name,
    /// which happens on first login.
    pub fn has_default_name(&self) -> bool {
        self.name == default_display_name(&self.email)
    }
}

/// Placeholder display name: the local part of the email address.
pub fn default_display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_owned()
}

/// One-time login code, at most one live per email.
#[derive(Debug, Clone)]
pub struct OneTimeCode {
    pub email: String,
    /// Six digits, leading zeros preserved.
    pub otp: String,
    pub organization_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub used: bool,
}

impl OneTimeCode {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// Immutable record of a privileged action.
#[derive(Debug, Clone)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub action: AuditAction,
    pub actor_id: Uuid,
    pub actor_email: String,
    pub organization_id: Uuid,
    pub target_id: Option<Uuid>,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Invite validity window in hours.
pub const INVITE_TTL_HOURS: i64 = 48;

/// One-time code validity window in minutes.
pub const OTP_TTL_MINS: i64 = 10;

/// Minimum length of an organization name-prefix search.
pub const ORG_SEARCH_MIN_QUERY_LEN: usize = 2;

/// Maximum results returned by an organization search.
pub const ORG_SEARCH_LIMIT: u64 = 10;

/// Default page size for audit log queries.
pub const AUDIT_QUERY_DEFAULT_LIMIT: u64 = 50;
