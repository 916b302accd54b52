use uuid::Uuid;

use crate::domain::repository::AuditLogRepository;
use crate::domain::types::AuditLogEntry;
use crate::error::AdminServiceError;

pub struct QueryAuditLogsUseCase<L: AuditLogRepository> {
    pub audit: L,
}

impl<L: AuditLogRepository> QueryAuditLogsUseCase<L> {
    /// Newest-first slice of the organization's audit trail. No cursor;
    /// admin-action volume stays small enough for a single capped page.
    pub async fn execute(
        &self,
        organization_id: Uuid,
        limit: u64,
    ) -> Result<Vec<AuditLogEntry>, AdminServiceError> {
        self.audit.list_by_org(organization_id, limit).await
    }
}
