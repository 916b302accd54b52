use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::AdminServiceError;
use crate::state::AppState;
use crate::usecase::accept_invite::{
    AcceptInviteInput, AcceptInviteUseCase, UpdateDisplayNameUseCase,
};

// ── POST /admin/accept-invite ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AcceptInviteRequest {
    pub token: Option<String>,
    pub email: Option<String>,
}

#[derive(Serialize)]
pub struct AcceptInviteResponse {
    pub success: bool,
    pub message: String,
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub already_active: Option<bool>,
}

pub async fn accept_invite(
    State(state): State<AppState>,
    Json(body): Json<AcceptInviteRequest>,
) -> Result<Json<AcceptInviteResponse>, AdminServiceError> {
    let (Some(token), Some(email)) = (body.token, body.email) else {
        return Err(AdminServiceError::MissingFields("token and email"));
    };

    let usecase = AcceptInviteUseCase {
        admins: state.admin_repo(),
        audit: state.audit_repo(),
    };
    let out = usecase.execute(AcceptInviteInput { token, email }).await?;

    let message = if out.already_active {
        "Your account is already active. You can log in now."
    } else {
        "Invitation accepted! You can now log in."
    };

    Ok(Json(AcceptInviteResponse {
        success: true,
        message: message.to_owned(),
        organization_id: out.organization_id.to_string(),
        already_active: out.already_active.then_some(true),
    }))
}

// ── PUT /admin/accept-invite ─────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateNameRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateNameResponse {
    pub success: bool,
    pub message: String,
}

pub async fn update_display_name(
    State(state): State<AppState>,
    Json(body): Json<UpdateNameRequest>,
) -> Result<Json<UpdateNameResponse>, AdminServiceError> {
    let (Some(email), Some(name)) = (body.email, body.name) else {
        return Err(AdminServiceError::MissingFields("email and name"));
    };

    let usecase = UpdateDisplayNameUseCase {
        admins: state.admin_repo(),
    };
    usecase.execute(&email, &name).await?;

    Ok(Json(UpdateNameResponse {
        success: true,
        message: "Name updated successfully".to_owned(),
    }))
}
