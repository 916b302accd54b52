use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use transify_domain::org::OrgCategory;

use crate::domain::types::Organization;
use crate::error::AdminServiceError;
use crate::state::AppState;
use crate::usecase::org::{LookupOrgUseCase, SearchOrgsUseCase};

// ── GET /org/lookup ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct OrgLookupQuery {
    pub code: Option<String>,
    pub search: Option<String>,
}

#[derive(Serialize)]
pub struct OrganizationResponse {
    pub id: String,
    pub name: String,
    pub code: String,
    pub category: OrgCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub member_count: i32,
    #[serde(serialize_with = "transify_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<Organization> for OrganizationResponse {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id.to_string(),
            name: org.name,
            code: org.code,
            category: org.category,
            address: org.address,
            member_count: org.member_count,
            created_at: org.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct SearchOrganizationsResponse {
    pub organizations: Vec<OrganizationResponse>,
}

pub async fn lookup_org(
    State(state): State<AppState>,
    Query(query): Query<OrgLookupQuery>,
) -> Result<Response, AdminServiceError> {
    if let Some(code) = query.code {
        let usecase = LookupOrgUseCase {
            orgs: state.org_repo(),
        };
        let org = usecase.execute(&code).await?;
        return Ok(Json(OrganizationResponse::from(org)).into_response());
    }

    if let Some(search) = query.search {
        let usecase = SearchOrgsUseCase {
            orgs: state.org_repo(),
        };
        let organizations = usecase.execute(&search).await?;
        return Ok(Json(SearchOrganizationsResponse {
            organizations: organizations
                .into_iter()
                .map(OrganizationResponse::from)
                .collect(),
        })
        .into_response());
    }

    Err(AdminServiceError::MissingLookupQuery)
}
