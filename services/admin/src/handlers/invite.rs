use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use transify_domain::admin::{AdminRole, AdminStatus};

use crate::error::AdminServiceError;
use crate::state::AppState;
use crate::usecase::invite::{InviteAdminInput, InviteAdminUseCase};

// ── POST /admin/invite ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct InviteAdminRequest {
    pub email: Option<String>,
    pub role: Option<String>,
    pub organization_id: Option<Uuid>,
    pub invited_by_user_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct InviteSummary {
    pub email: String,
    pub role: AdminRole,
    pub status: AdminStatus,
    #[serde(serialize_with = "transify_core::serde::to_rfc3339_ms_opt")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
pub struct InviteAdminResponse {
    pub success: bool,
    pub message: String,
    pub invite: InviteSummary,
    /// Present only when delivery failed, so the link can be shared manually.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}

pub async fn invite_admin(
    State(state): State<AppState>,
    Json(body): Json<InviteAdminRequest>,
) -> Result<Json<InviteAdminResponse>, AdminServiceError> {
    let (Some(email), Some(role), Some(organization_id), Some(invited_by_user_id)) = (
        body.email,
        body.role,
        body.organization_id,
        body.invited_by_user_id,
    ) else {
        return Err(AdminServiceError::MissingFields(
            "email, role, organization_id, and invited_by_user_id",
        ));
    };
    let role = AdminRole::from_str_wire(&role).ok_or(AdminServiceError::InvalidRole)?;

    let usecase = InviteAdminUseCase {
        admins: state.admin_repo(),
        orgs: state.org_repo(),
        audit: state.audit_repo(),
        mailer: state.mailer(),
        app_base_url: state.app_base_url.clone(),
    };
    let out = usecase
        .execute(InviteAdminInput {
            email,
            role,
            organization_id,
            invited_by_user_id,
        })
        .await?;

    let message = if out.email_error.is_none() {
        format!("Invite email sent to {}", out.account.email)
    } else {
        format!(
            "Invite created for {}, but email delivery failed. Share the link manually.",
            out.account.email
        )
    };
    let accept_url = out.email_error.is_some().then_some(out.accept_url);

    Ok(Json(InviteAdminResponse {
        success: true,
        message,
        invite: InviteSummary {
            email: out.account.email,
            role: out.account.role,
            status: out.account.status,
            expires_at: out.account.invite_expires_at,
        },
        accept_url,
        email_error: out.email_error,
    }))
}
