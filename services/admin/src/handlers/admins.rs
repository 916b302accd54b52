use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use transify_domain::admin::{AdminRole, AdminStatus};

use crate::domain::types::AdminAccount;
use crate::error::AdminServiceError;
use crate::state::AppState;
use crate::usecase::admins::{
    ChangeRoleInput, ChangeRoleUseCase, ListAdminsUseCase, RemoveAdminInput, RemoveAdminUseCase,
};

// ── GET /admin/list ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ListAdminsQuery {
    pub organization_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct AdminRow {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub organization_id: String,
    pub role: AdminRole,
    pub status: AdminStatus,
    #[serde(serialize_with = "transify_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "transify_core::serde::to_rfc3339_ms_opt")]
    pub invite_expires_at: Option<DateTime<Utc>>,
    #[serde(serialize_with = "transify_core::serde::to_rfc3339_ms_opt")]
    pub last_active: Option<DateTime<Utc>>,
}

impl From<AdminAccount> for AdminRow {
    fn from(account: AdminAccount) -> Self {
        Self {
            user_id: account.id.to_string(),
            email: account.email,
            name: account.name,
            organization_id: account.organization_id.to_string(),
            role: account.role,
            status: account.status,
            created_at: account.created_at,
            invite_expires_at: account.invite_expires_at,
            last_active: account.last_active,
        }
    }
}

#[derive(Serialize)]
pub struct ListAdminsResponse {
    pub admins: Vec<AdminRow>,
}

pub async fn list_admins(
    State(state): State<AppState>,
    Query(query): Query<ListAdminsQuery>,
) -> Result<Json<ListAdminsResponse>, AdminServiceError> {
    let organization_id = query
        .organization_id
        .ok_or(AdminServiceError::MissingFields("organization_id"))?;

    let usecase = ListAdminsUseCase {
        admins: state.admin_repo(),
    };
    let admins = usecase.execute(organization_id).await?;

    Ok(Json(ListAdminsResponse {
        admins: admins.into_iter().map(AdminRow::from).collect(),
    }))
}

// ── POST /admin/change-role ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ChangeRoleRequest {
    pub user_id: Option<Uuid>,
    pub new_role: Option<String>,
    pub changed_by_user_id: Option<Uuid>,
    pub organization_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

pub async fn change_role(
    State(state): State<AppState>,
    Json(body): Json<ChangeRoleRequest>,
) -> Result<Json<ActionResponse>, AdminServiceError> {
    let (Some(user_id), Some(new_role), Some(changed_by_user_id), Some(organization_id)) = (
        body.user_id,
        body.new_role,
        body.changed_by_user_id,
        body.organization_id,
    ) else {
        return Err(AdminServiceError::MissingFields(
            "user_id, new_role, changed_by_user_id, and organization_id",
        ));
    };
    let new_role = AdminRole::from_str_wire(&new_role).ok_or(AdminServiceError::InvalidRole)?;

    let usecase = ChangeRoleUseCase {
        admins: state.admin_repo(),
        audit: state.audit_repo(),
    };
    usecase
        .execute(ChangeRoleInput {
            user_id,
            new_role,
            changed_by_user_id,
            organization_id,
        })
        .await?;

    Ok(Json(ActionResponse {
        success: true,
        message: format!("Role changed to {}", new_role.as_str()),
    }))
}

// ── POST /admin/remove ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RemoveAdminRequest {
    pub user_id: Option<Uuid>,
    pub removed_by_user_id: Option<Uuid>,
    pub organization_id: Option<Uuid>,
}

pub async fn remove_admin(
    State(state): State<AppState>,
    Json(body): Json<RemoveAdminRequest>,
) -> Result<Json<ActionResponse>, AdminServiceError> {
    let (Some(user_id), Some(removed_by_user_id), Some(organization_id)) =
        (body.user_id, body.removed_by_user_id, body.organization_id)
    else {
        return Err(AdminServiceError::MissingFields(
            "user_id, removed_by_user_id, and organization_id",
        ));
    };

    let usecase = RemoveAdminUseCase {
        admins: state.admin_repo(),
        audit: state.audit_repo(),
    };
    let removed = usecase
        .execute(RemoveAdminInput {
            user_id,
            removed_by_user_id,
            organization_id,
        })
        .await?;

    Ok(Json(ActionResponse {
        success: true,
        message: format!("Admin {} has been removed", removed.email),
    }))
}
