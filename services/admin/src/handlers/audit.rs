use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use transify_domain::audit::AuditAction;

use crate::domain::types::{AUDIT_QUERY_DEFAULT_LIMIT, AuditLogEntry};
use crate::error::AdminServiceError;
use crate::state::AppState;
use crate::usecase::audit::QueryAuditLogsUseCase;

// ── GET /admin/audit-logs ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AuditLogsQuery {
    pub organization_id: Option<Uuid>,
    pub limit: Option<u64>,
}

#[derive(Serialize)]
pub struct AuditLogRow {
    pub id: String,
    pub action: AuditAction,
    pub actor_id: String,
    pub actor_email: String,
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(serialize_with = "transify_core::serde::to_rfc3339_ms")]
    pub timestamp: DateTime<Utc>,
}

impl From<AuditLogEntry> for AuditLogRow {
    fn from(entry: AuditLogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            action: entry.action,
            actor_id: entry.actor_id.to_string(),
            actor_email: entry.actor_email,
            organization_id: entry.organization_id.to_string(),
            target_id: entry.target_id.map(|id| id.to_string()),
            details: entry.details,
            timestamp: entry.timestamp,
        }
    }
}

#[derive(Serialize)]
pub struct AuditLogsResponse {
    pub logs: Vec<AuditLogRow>,
}

pub async fn audit_logs(
    State(state): State<AppState>,
    Query(query): Query<AuditLogsQuery>,
) -> Result<Json<AuditLogsResponse>, AdminServiceError> {
    let organization_id = query
        .organization_id
        .ok_or(AdminServiceError::MissingFields("organization_id"))?;
    let limit = query.limit.unwrap_or(AUDIT_QUERY_DEFAULT_LIMIT);

    let usecase = QueryAuditLogsUseCase {
        audit: state.audit_repo(),
    };
    let logs = usecase.execute(organization_id, limit).await?;

    Ok(Json(AuditLogsResponse {
        logs: logs.into_iter().map(AuditLogRow::from).collect(),
    }))
}
