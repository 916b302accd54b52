use chrono::{Duration, Utc};
use uuid::Uuid;

use transify_admin::domain::repository::AuditLogRepository;
use transify_admin::domain::types::AuditLogEntry;
use transify_admin::usecase::admins::{
    ChangeRoleInput, ChangeRoleUseCase, RemoveAdminInput, RemoveAdminUseCase,
};
use transify_admin::usecase::audit::QueryAuditLogsUseCase;
use transify_admin::usecase::invite::{InviteAdminInput, InviteAdminUseCase};
use transify_domain::admin::AdminRole;
use transify_domain::audit::AuditAction;

use crate::helpers::{
    MockAdminRepo, MockAuditRepo, MockMailer, MockOrgRepo, test_org, test_super_admin,
};

fn entry(organization_id: Uuid, action: AuditAction, offset_secs: i64) -> AuditLogEntry {
    AuditLogEntry {
        id: Uuid::new_v4(),
        action,
        actor_id: Uuid::new_v4(),
        actor_email: "dana@mapleacademy.example".to_owned(),
        organization_id,
        target_id: None,
        details: None,
        timestamp: Utc::now() + Duration::seconds(offset_secs),
    }
}

#[tokio::test]
async fn should_return_entries_newest_first() {
    let org_id = Uuid::new_v4();
    let audit = MockAuditRepo::empty();
    for (action, offset) in [
        (AuditAction::AdminInviteSent, 0),
        (AuditAction::AdminInviteAccepted, 10),
        (AuditAction::AdminLogin, 20),
    ] {
        audit.append(&entry(org_id, action, offset)).await.unwrap();
    }

    let uc = QueryAuditLogsUseCase { audit };
    let logs = uc.execute(org_id, 50).await.unwrap();

    let actions: Vec<AuditAction> = logs.iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            AuditAction::AdminLogin,
            AuditAction::AdminInviteAccepted,
            AuditAction::AdminInviteSent,
        ]
    );
}

#[tokio::test]
async fn should_respect_the_query_limit() {
    let org_id = Uuid::new_v4();
    let audit = MockAuditRepo::empty();
    for offset in 0..5 {
        audit
            .append(&entry(org_id, AuditAction::AdminLogin, offset))
            .await
            .unwrap();
    }

    let uc = QueryAuditLogsUseCase { audit };
    let logs = uc.execute(org_id, 2).await.unwrap();
    assert_eq!(logs.len(), 2);
    // The two newest survive the cap.
    assert!(logs[0].timestamp >= logs[1].timestamp);
}

#[tokio::test]
async fn should_scope_entries_to_the_organization() {
    let org_a = Uuid::new_v4();
    let org_b = Uuid::new_v4();
    let audit = MockAuditRepo::empty();
    audit
        .append(&entry(org_a, AuditAction::AdminLogin, 0))
        .await
        .unwrap();
    audit
        .append(&entry(org_b, AuditAction::AdminRemoved, 0))
        .await
        .unwrap();

    let uc = QueryAuditLogsUseCase { audit };
    let logs = uc.execute(org_a, 50).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].organization_id, org_a);
}

#[tokio::test]
async fn should_record_three_sequential_admin_actions() {
    let org = test_org();
    let super_admin = test_super_admin(org.id);
    let admins = MockAdminRepo::new(vec![super_admin.clone()]);
    let audit = MockAuditRepo::empty();

    // Invite, promote, remove: one audit row each.
    let invite = InviteAdminUseCase {
        admins: admins.clone(),
        orgs: MockOrgRepo::new(vec![org.clone()]),
        audit: audit.clone(),
        mailer: MockMailer::new(),
        app_base_url: "https://app.transify.example".to_owned(),
    };
    let invited = invite
        .execute(InviteAdminInput {
            email: "jesse@mapleacademy.example".to_owned(),
            role: AdminRole::Admin,
            organization_id: org.id,
            invited_by_user_id: super_admin.id,
        })
        .await
        .unwrap();

    let change = ChangeRoleUseCase {
        admins: admins.clone(),
        audit: audit.clone(),
    };
    change
        .execute(ChangeRoleInput {
            user_id: invited.account.id,
            new_role: AdminRole::Admin,
            changed_by_user_id: super_admin.id,
            organization_id: org.id,
        })
        .await
        .unwrap();

    let remove = RemoveAdminUseCase {
        admins: admins.clone(),
        audit: audit.clone(),
    };
    remove
        .execute(RemoveAdminInput {
            user_id: invited.account.id,
            removed_by_user_id: super_admin.id,
            organization_id: org.id,
        })
        .await
        .unwrap();

    let uc = QueryAuditLogsUseCase { audit };
    let logs = uc.execute(org.id, 50).await.unwrap();

    assert_eq!(logs.len(), 3);
    for pair in logs.windows(2) {
        assert!(
            pair[0].timestamp >= pair[1].timestamp,
            "entries must come back newest first"
        );
    }
    let actions: Vec<AuditAction> = logs.iter().map(|e| e.action).collect();
    for expected in [
        AuditAction::AdminInviteSent,
        AuditAction::AdminRoleChanged,
        AuditAction::AdminRemoved,
    ] {
        assert!(actions.contains(&expected), "missing {expected:?}");
    }
}
