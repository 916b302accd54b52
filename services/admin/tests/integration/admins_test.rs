use chrono::Duration;
use uuid::Uuid;

use transify_admin::error::AdminServiceError;
use transify_admin::usecase::admins::{
    ChangeRoleInput, ChangeRoleUseCase, ListAdminsUseCase, RemoveAdminInput, RemoveAdminUseCase,
};
use transify_domain::admin::{AdminRole, AdminStatus};
use transify_domain::audit::AuditAction;

use crate::helpers::{
    MockAdminRepo, MockAuditRepo, test_active_admin, test_org, test_super_admin,
};

#[tokio::test]
async fn should_list_admins_newest_first() {
    let org = test_org();
    let mut oldest = test_super_admin(org.id);
    let mut middle = test_active_admin(org.id);
    let mut newest = test_active_admin(org.id);
    newest.id = Uuid::new_v4();
    newest.email = "zoe@mapleacademy.example".to_owned();
    middle.created_at = oldest.created_at + Duration::minutes(5);
    newest.created_at = oldest.created_at + Duration::minutes(10);
    oldest.created_at -= Duration::minutes(1);

    let uc = ListAdminsUseCase {
        admins: MockAdminRepo::new(vec![oldest.clone(), middle.clone(), newest.clone()]),
    };
    let rows = uc.execute(org.id).await.unwrap();

    let ids: Vec<Uuid> = rows.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);
}

#[tokio::test]
async fn should_reject_role_change_by_plain_admin() {
    let org = test_org();
    let changer = test_active_admin(org.id);
    let target = test_super_admin(org.id);

    let uc = ChangeRoleUseCase {
        admins: MockAdminRepo::new(vec![changer.clone(), target.clone()]),
        audit: MockAuditRepo::empty(),
    };
    let result = uc
        .execute(ChangeRoleInput {
            user_id: target.id,
            new_role: AdminRole::Admin,
            changed_by_user_id: changer.id,
            organization_id: org.id,
        })
        .await;

    assert!(matches!(result, Err(AdminServiceError::NotSuperAdmin)));
}

#[tokio::test]
async fn should_reject_changing_own_role() {
    let org = test_org();
    let super_admin = test_super_admin(org.id);

    let uc = ChangeRoleUseCase {
        admins: MockAdminRepo::new(vec![super_admin.clone()]),
        audit: MockAuditRepo::empty(),
    };
    let result = uc
        .execute(ChangeRoleInput {
            user_id: super_admin.id,
            new_role: AdminRole::Admin,
            changed_by_user_id: super_admin.id,
            organization_id: org.id,
        })
        .await;

    assert!(
        matches!(result, Err(AdminServiceError::SelfRoleChange)),
        "expected SelfRoleChange, got {result:?}"
    );
}

#[tokio::test]
async fn should_change_role_and_record_before_and_after() {
    let org = test_org();
    let super_admin = test_super_admin(org.id);
    let target = test_active_admin(org.id);
    let admins = MockAdminRepo::new(vec![super_admin.clone(), target.clone()]);
    let audit = MockAuditRepo::empty();
    let accounts = admins.accounts_handle();
    let entries = audit.entries_handle();

    let uc = ChangeRoleUseCase { admins, audit };
    uc.execute(ChangeRoleInput {
        user_id: target.id,
        new_role: AdminRole::SuperAdmin,
        changed_by_user_id: super_admin.id,
        organization_id: org.id,
    })
    .await
    .unwrap();

    let accounts = accounts.lock().unwrap();
    let updated = accounts.iter().find(|a| a.id == target.id).unwrap();
    assert_eq!(updated.role, AdminRole::SuperAdmin);

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, AuditAction::AdminRoleChanged);
    let details = entries[0].details.as_deref().unwrap();
    assert!(details.contains("from ADMIN to SUPER_ADMIN"), "got {details}");
}

#[tokio::test]
async fn should_return_not_found_for_unknown_target() {
    let org = test_org();
    let super_admin = test_super_admin(org.id);

    let uc = ChangeRoleUseCase {
        admins: MockAdminRepo::new(vec![super_admin.clone()]),
        audit: MockAuditRepo::empty(),
    };
    let result = uc
        .execute(ChangeRoleInput {
            user_id: Uuid::new_v4(),
            new_role: AdminRole::Admin,
            changed_by_user_id: super_admin.id,
            organization_id: org.id,
        })
        .await;

    assert!(matches!(result, Err(AdminServiceError::AdminNotFound)));
}

#[tokio::test]
async fn should_reject_removing_yourself() {
    let org = test_org();
    let super_admin = test_super_admin(org.id);

    let uc = RemoveAdminUseCase {
        admins: MockAdminRepo::new(vec![super_admin.clone()]),
        audit: MockAuditRepo::empty(),
    };
    let result = uc
        .execute(RemoveAdminInput {
            user_id: super_admin.id,
            removed_by_user_id: super_admin.id,
            organization_id: org.id,
        })
        .await;

    assert!(
        matches!(result, Err(AdminServiceError::SelfRemoval)),
        "expected SelfRemoval, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_removing_another_super_admin() {
    let org = test_org();
    let remover = test_super_admin(org.id);
    let mut other = test_super_admin(org.id);
    other.id = Uuid::new_v4();
    other.email = "imani@mapleacademy.example".to_owned();

    let uc = RemoveAdminUseCase {
        admins: MockAdminRepo::new(vec![remover.clone(), other.clone()]),
        audit: MockAuditRepo::empty(),
    };
    let result = uc
        .execute(RemoveAdminInput {
            user_id: other.id,
            removed_by_user_id: remover.id,
            organization_id: org.id,
        })
        .await;

    assert!(
        matches!(result, Err(AdminServiceError::SuperAdminRemoval)),
        "super admins must be demoted before removal, got {result:?}"
    );
}

#[tokio::test]
async fn should_disable_admin_and_retain_the_row() {
    let org = test_org();
    let remover = test_super_admin(org.id);
    let target = test_active_admin(org.id);
    let admins = MockAdminRepo::new(vec![remover.clone(), target.clone()]);
    let audit = MockAuditRepo::empty();
    let accounts = admins.accounts_handle();
    let entries = audit.entries_handle();

    let uc = RemoveAdminUseCase { admins, audit };
    let removed = uc
        .execute(RemoveAdminInput {
            user_id: target.id,
            removed_by_user_id: remover.id,
            organization_id: org.id,
        })
        .await
        .unwrap();
    assert_eq!(removed.email, target.email);

    let accounts = accounts.lock().unwrap();
    assert_eq!(accounts.len(), 2, "disabled rows are never deleted");
    let row = accounts.iter().find(|a| a.id == target.id).unwrap();
    assert_eq!(row.status, AdminStatus::Disabled);
    assert_eq!(row.disabled_by, Some(remover.id));
    assert!(row.disabled_at.is_some());

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, AuditAction::AdminRemoved);
}
