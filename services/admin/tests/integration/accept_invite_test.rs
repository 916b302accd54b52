use chrono::{Duration, Utc};

use transify_admin::error::AdminServiceError;
use transify_admin::usecase::accept_invite::{
    AcceptInviteInput, AcceptInviteUseCase, UpdateDisplayNameUseCase,
};
use transify_domain::admin::AdminStatus;
use transify_domain::audit::AuditAction;

use crate::helpers::{MockAdminRepo, MockAuditRepo, test_invited_admin, test_org};

#[tokio::test]
async fn should_activate_account_exactly_once_then_be_idempotent() {
    let org = test_org();
    let invited = test_invited_admin(org.id, "tok-1");
    let admins = MockAdminRepo::new(vec![invited.clone()]);
    let audit = MockAuditRepo::empty();
    let accounts = admins.accounts_handle();
    let entries = audit.entries_handle();

    let uc = AcceptInviteUseCase {
        admins: admins.clone(),
        audit: audit.clone(),
    };

    let first = uc
        .execute(AcceptInviteInput {
            token: "tok-1".to_owned(),
            email: invited.email.clone(),
        })
        .await
        .unwrap();
    assert!(!first.already_active);
    assert_eq!(first.organization_id, org.id);

    {
        let accounts = accounts.lock().unwrap();
        let row = &accounts[0];
        assert_eq!(row.status, AdminStatus::Active);
        assert!(row.invite_token.is_none(), "token must be cleared");
        assert!(row.invite_expires_at.is_none());
        assert!(row.activated_at.is_some());
    }
    assert_eq!(entries.lock().unwrap().len(), 1);
    assert_eq!(
        entries.lock().unwrap()[0].action,
        AuditAction::AdminInviteAccepted
    );

    // Re-clicking the same link is a friendly no-op, not an error.
    let second = uc
        .execute(AcceptInviteInput {
            token: "tok-1".to_owned(),
            email: invited.email.clone(),
        })
        .await
        .unwrap();
    assert!(second.already_active);
    assert_eq!(second.organization_id, org.id);
    assert_eq!(entries.lock().unwrap().len(), 1, "no second audit entry");
}

#[tokio::test]
async fn should_accept_just_before_expiry() {
    let org = test_org();
    let mut invited = test_invited_admin(org.id, "tok-edge");
    invited.invite_expires_at = Some(Utc::now() + Duration::seconds(1));

    let uc = AcceptInviteUseCase {
        admins: MockAdminRepo::new(vec![invited.clone()]),
        audit: MockAuditRepo::empty(),
    };
    let out = uc
        .execute(AcceptInviteInput {
            token: "tok-edge".to_owned(),
            email: invited.email.clone(),
        })
        .await
        .unwrap();
    assert!(!out.already_active);
}

#[tokio::test]
async fn should_return_gone_just_after_expiry() {
    let org = test_org();
    let mut invited = test_invited_admin(org.id, "tok-late");
    invited.invite_expires_at = Some(Utc::now() - Duration::seconds(1));

    let uc = AcceptInviteUseCase {
        admins: MockAdminRepo::new(vec![invited.clone()]),
        audit: MockAuditRepo::empty(),
    };
    let result = uc
        .execute(AcceptInviteInput {
            token: "tok-late".to_owned(),
            email: invited.email.clone(),
        })
        .await;

    assert!(
        matches!(result, Err(AdminServiceError::InviteExpired)),
        "expected InviteExpired, got {result:?}"
    );
}

#[tokio::test]
async fn should_return_not_found_for_unknown_token() {
    let uc = AcceptInviteUseCase {
        admins: MockAdminRepo::empty(),
        audit: MockAuditRepo::empty(),
    };
    let result = uc
        .execute(AcceptInviteInput {
            token: "no-such-token".to_owned(),
            email: "ghost@example.com".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(AdminServiceError::InviteNotFound)));
}

#[tokio::test]
async fn should_update_and_trim_display_name_of_active_admin() {
    let org = test_org();
    let invited = test_invited_admin(org.id, "tok-2");
    let admins = MockAdminRepo::new(vec![invited.clone()]);
    let accounts = admins.accounts_handle();

    let accept = AcceptInviteUseCase {
        admins: admins.clone(),
        audit: MockAuditRepo::empty(),
    };
    accept
        .execute(AcceptInviteInput {
            token: "tok-2".to_owned(),
            email: invited.email.clone(),
        })
        .await
        .unwrap();

    let rename = UpdateDisplayNameUseCase { admins };
    rename
        .execute(&invited.email, "  Noor Haddad  ")
        .await
        .unwrap();

    assert_eq!(accounts.lock().unwrap()[0].name, "Noor Haddad");
}

#[tokio::test]
async fn should_reject_name_update_while_still_invited() {
    let org = test_org();
    let invited = test_invited_admin(org.id, "tok-3");
    let uc = UpdateDisplayNameUseCase {
        admins: MockAdminRepo::new(vec![invited.clone()]),
    };

    let result = uc.execute(&invited.email, "Noor").await;
    assert!(matches!(result, Err(AdminServiceError::AdminNotFound)));
}
