use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Admin service domain error variants.
///
/// Every handler failure maps to exactly one of these; nothing crosses the
/// HTTP boundary unformatted. The OTP variants are deliberately distinct so
/// the login screen can show the user what actually went wrong.
#[derive(Debug, thiserror::Error)]
pub enum AdminServiceError {
    #[error("{0} are required")]
    MissingFields(&'static str),
    #[error("invalid role")]
    InvalidRole,
    #[error("provide a code or search parameter")]
    MissingLookupQuery,
    #[error("only super admins can manage other admins")]
    NotSuperAdmin,
    #[error("you cannot change your own role")]
    SelfRoleChange,
    #[error("you cannot remove yourself")]
    SelfRemoval,
    #[error("cannot remove a super admin, demote them first")]
    SuperAdminRemoval,
    #[error("this email is not authorized for this organization")]
    NotAuthorizedForOrg,
    #[error("this account has been disabled")]
    AccountDisabled,
    #[error("admin user not found")]
    AdminNotFound,
    #[error("organization not found")]
    OrganizationNotFound,
    #[error("invalid or expired invite link")]
    InviteNotFound,
    #[error("this admin is already active in this organization")]
    AlreadyActive,
    #[error("this invite link has expired, ask for a new invitation")]
    InviteExpired,
    #[error("no code found, request a new one")]
    OtpNotFound,
    #[error("this code has already been used, request a new one")]
    OtpUsed,
    #[error("this code has expired, request a new one")]
    OtpExpired,
    #[error("invalid verification code")]
    OtpMismatch,
    #[error("organization mismatch")]
    OtpOrgMismatch,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AdminServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "MISSING_FIELDS",
            Self::InvalidRole => "INVALID_ROLE",
            Self::MissingLookupQuery => "MISSING_LOOKUP_QUERY",
            Self::NotSuperAdmin => "SUPER_ADMIN_REQUIRED",
            Self::SelfRoleChange => "SELF_ROLE_CHANGE",
            Self::SelfRemoval => "SELF_REMOVAL",
            Self::SuperAdminRemoval => "SUPER_ADMIN_REMOVAL",
            Self::NotAuthorizedForOrg => "NOT_AUTHORIZED_FOR_ORG",
            Self::AccountDisabled => "ACCOUNT_DISABLED",
            Self::AdminNotFound => "ADMIN_NOT_FOUND",
            Self::OrganizationNotFound => "ORGANIZATION_NOT_FOUND",
            Self::InviteNotFound => "INVITE_NOT_FOUND",
            Self::AlreadyActive => "ALREADY_ACTIVE",
            Self::InviteExpired => "INVITE_EXPIRED",
            Self::OtpNotFound => "OTP_NOT_FOUND",
            Self::OtpUsed => "OTP_USED",
            Self::OtpExpired => "OTP_EXPIRED",
            Self::OtpMismatch => "OTP_MISMATCH",
            Self::OtpOrgMismatch => "OTP_ORG_MISMATCH",
            Self::Internal(_) => "INTERNAL",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::MissingFields(_)
            | Self::InvalidRole
            | Self::MissingLookupQuery
            | Self::OtpNotFound
            | Self::OtpUsed
            | Self::OtpExpired
            | Self::OtpMismatch
            | Self::OtpOrgMismatch => StatusCode::BAD_REQUEST,
            Self::NotSuperAdmin
            | Self::SelfRoleChange
            | Self::SelfRemoval
            | Self::SuperAdminRemoval
            | Self::NotAuthorizedForOrg
            | Self::AccountDisabled => StatusCode::FORBIDDEN,
            Self::AdminNotFound | Self::OrganizationNotFound | Self::InviteNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::AlreadyActive => StatusCode::CONFLICT,
            Self::InviteExpired => StatusCode::GONE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AdminServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        // Internal errors need the anyhow chain logged so the root cause is traceable.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "error": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
