use crate::domain::repository::OrganizationRepository;
use crate::domain::types::{ORG_SEARCH_LIMIT, ORG_SEARCH_MIN_QUERY_LEN, Organization};
use crate::error::AdminServiceError;

// ── LookupOrg ────────────────────────────────────────────────────────────────

pub struct LookupOrgUseCase<O: OrganizationRepository> {
    pub orgs: O,
}

impl<O: OrganizationRepository> LookupOrgUseCase<O> {
    /// Case-insensitive exact lookup: codes are stored uppercase, so the
    /// input is uppercased before matching.
    pub async fn execute(&self, code: &str) -> Result<Organization, AdminServiceError> {
        let code = code.trim().to_uppercase();
        self.orgs
            .find_by_code(&code)
            .await?
            .ok_or(AdminServiceError::OrganizationNotFound)
    }
}

// ── SearchOrgs ───────────────────────────────────────────────────────────────

pub struct SearchOrgsUseCase<O: OrganizationRepository> {
    pub orgs: O,
}

impl<O: OrganizationRepository> SearchOrgsUseCase<O> {
    /// Name-prefix search. Queries shorter than the minimum return an empty
    /// list rather than an error.
    pub async fn execute(&self, query: &str) -> Result<Vec<Organization>, AdminServiceError> {
        let query = query.trim();
        if query.len() < ORG_SEARCH_MIN_QUERY_LEN {
            return Ok(Vec::new());
        }
        self.orgs.search_by_name_prefix(query, ORG_SEARCH_LIMIT).await
    }
}
