use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use transify_domain::admin::{AdminRole, AdminStatus};

use crate::error::AdminServiceError;
use crate::handlers::org::OrganizationResponse;
use crate::state::AppState;
use crate::usecase::otp::{SendOtpInput, SendOtpUseCase, VerifyOtpInput, VerifyOtpUseCase};

// ── POST /admin/send-otp ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SendOtpRequest {
    pub email: Option<String>,
    pub organization_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
}

pub async fn send_otp(
    State(state): State<AppState>,
    Json(body): Json<SendOtpRequest>,
) -> Result<Json<SendOtpResponse>, AdminServiceError> {
    let (Some(email), Some(organization_id)) = (body.email, body.organization_id) else {
        return Err(AdminServiceError::MissingFields("email and organization_id"));
    };

    let usecase = SendOtpUseCase {
        admins: state.admin_repo(),
        otps: state.otp_repo(),
        mailer: state.mailer(),
    };
    let message = format!("Verification code sent to {}", email.trim().to_lowercase());
    let out = usecase
        .execute(SendOtpInput {
            email,
            organization_id,
        })
        .await?;

    Ok(Json(SendOtpResponse {
        success: true,
        message,
        email_error: out.email_error,
    }))
}

// ── POST /admin/verify-otp ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub email: Option<String>,
    pub otp: Option<String>,
    pub organization_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct AdminInfo {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: AdminRole,
    pub status: AdminStatus,
    pub organization_id: String,
}

#[derive(Serialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    #[serde(rename = "customToken")]
    pub custom_token: String,
    pub is_first_login: bool,
    pub admin: AdminInfo,
    pub organization: Option<OrganizationResponse>,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Json<VerifyOtpResponse>, AdminServiceError> {
    let (Some(email), Some(otp), Some(organization_id)) =
        (body.email, body.otp, body.organization_id)
    else {
        return Err(AdminServiceError::MissingFields(
            "email, otp, and organization_id",
        ));
    };

    let usecase = VerifyOtpUseCase {
        admins: state.admin_repo(),
        orgs: state.org_repo(),
        otps: state.otp_repo(),
        audit: state.audit_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(VerifyOtpInput {
            email,
            otp,
            organization_id,
        })
        .await?;

    Ok(Json(VerifyOtpResponse {
        success: true,
        custom_token: out.token,
        is_first_login: out.is_first_login,
        admin: AdminInfo {
            user_id: out.account.id.to_string(),
            email: out.account.email,
            name: out.account.name,
            role: out.account.role,
            status: out.account.status,
            organization_id: out.account.organization_id.to_string(),
        },
        organization: out.organization.map(OrganizationResponse::from),
    }))
}
