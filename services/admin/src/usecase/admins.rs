use chrono::Utc;
use uuid::Uuid;

use transify_domain::admin::{AdminRole, can_manage_admins};
use transify_domain::audit::AuditAction;

use crate::domain::repository::{AdminRepository, AuditLogRepository};
use crate::domain::types::{AdminAccount, AuditLogEntry};
use crate::error::AdminServiceError;

// ── ListAdmins ───────────────────────────────────────────────────────────────

pub struct ListAdminsUseCase<A: AdminRepository> {
    pub admins: A,
}

impl<A: AdminRepository> ListAdminsUseCase<A> {
    pub async fn execute(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<AdminAccount>, AdminServiceError> {
        self.admins.list_by_org(organization_id).await
    }
}

// ── ChangeRole ───────────────────────────────────────────────────────────────

pub struct ChangeRoleInput {
    pub user_id: Uuid,
    pub new_role: AdminRole,
    pub changed_by_user_id: Uuid,
    pub organization_id: Uuid,
}

pub struct ChangeRoleUseCase<A: AdminRepository, L: AuditLogRepository> {
    pub admins: A,
    pub audit: L,
}

impl<A: AdminRepository, L: AuditLogRepository> ChangeRoleUseCase<A, L> {
    pub async fn execute(&self, input: ChangeRoleInput) -> Result<(), AdminServiceError> {
        // 1. Only a super admin may change roles.
        let changer = self
            .admins
            .find_by_id(input.changed_by_user_id)
            .await?
            .ok_or(AdminServiceError::NotSuperAdmin)?;
        if !can_manage_admins(changer.role) {
            return Err(AdminServiceError::NotSuperAdmin);
        }

        // 2. Target must exist.
        let target = self
            .admins
            .find_by_id(input.user_id)
            .await?
            .ok_or(AdminServiceError::AdminNotFound)?;

        // 3. Never on yourself.
        if input.user_id == input.changed_by_user_id {
            return Err(AdminServiceError::SelfRoleChange);
        }

        let old_role = target.role;
        self.admins.change_role(input.user_id, input.new_role).await?;

        self.audit
            .append(&AuditLogEntry {
                id: Uuid::new_v4(),
                action: AuditAction::AdminRoleChanged,
                actor_id: changer.id,
                actor_email: changer.email,
                organization_id: input.organization_id,
                target_id: Some(input.user_id),
                details: Some(format!(
                    "changed role of {} from {} to {}",
                    target.email,
                    old_role.as_str(),
                    input.new_role.as_str()
                )),
                timestamp: Utc::now(),
            })
            .await
    }
}

// ── RemoveAdmin ──────────────────────────────────────────────────────────────

pub struct RemoveAdminInput {
    pub user_id: Uuid,
    pub removed_by_user_id: Uuid,
    pub organization_id: Uuid,
}

pub struct RemoveAdminUseCase<A: AdminRepository, L: AuditLogRepository> {
    pub admins: A,
    pub audit: L,
}

impl<A: AdminRepository, L: AuditLogRepository> RemoveAdminUseCase<A, L> {
    /// Returns the removed account (pre-disable state) for the caller's
    /// confirmation message.
    pub async fn execute(
        &self,
        input: RemoveAdminInput,
    ) -> Result<AdminAccount, AdminServiceError> {
        // 1. Only a super admin may remove.
        let remover = self
            .admins
            .find_by_id(input.removed_by_user_id)
            .await?
            .ok_or(AdminServiceError::NotSuperAdmin)?;
        if !can_manage_admins(remover.role) {
            return Err(AdminServiceError::NotSuperAdmin);
        }

        // 2. Target must exist.
        let target = self
            .admins
            .find_by_id(input.user_id)
            .await?
            .ok_or(AdminServiceError::AdminNotFound)?;

        // 3. Never yourself, never another super admin (demote first).
        if input.user_id == input.removed_by_user_id {
            return Err(AdminServiceError::SelfRemoval);
        }
        if target.role == AdminRole::SuperAdmin {
            return Err(AdminServiceError::SuperAdminRemoval);
        }

        // 4. Disable, never delete; the row stays for history.
        let now = Utc::now();
        self.admins.disable(input.user_id, remover.id, now).await?;

        self.audit
            .append(&AuditLogEntry {
                id: Uuid::new_v4(),
                action: AuditAction::AdminRemoved,
                actor_id: remover.id,
                actor_email: remover.email,
                organization_id: input.organization_id,
                target_id: Some(input.user_id),
                details: Some(format!("removed admin {} ({})", target.email, target.name)),
                timestamp: now,
            })
            .await?;

        Ok(target)
    }
}
