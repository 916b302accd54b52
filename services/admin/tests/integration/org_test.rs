use chrono::Utc;
use uuid::Uuid;

use transify_admin::domain::types::Organization;
use transify_admin::error::AdminServiceError;
use transify_admin::usecase::org::{LookupOrgUseCase, SearchOrgsUseCase};
use transify_domain::org::OrgCategory;

use crate::helpers::{MockOrgRepo, test_org};

fn named_org(name: &str, code: &str) -> Organization {
    Organization {
        id: Uuid::new_v4(),
        name: name.to_owned(),
        code: code.to_owned(),
        category: OrgCategory::Corporate,
        address: None,
        member_count: 40,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn should_lookup_code_case_insensitively() {
    let org = test_org();
    let uc = LookupOrgUseCase {
        orgs: MockOrgRepo::new(vec![org.clone()]),
    };

    for input in ["MAPLE1", "maple1", "Maple1", " maple1 "] {
        let found = uc.execute(input).await.unwrap();
        assert_eq!(found.id, org.id, "casing {input:?} must resolve");
    }
}

#[tokio::test]
async fn should_return_not_found_for_unknown_code() {
    let uc = LookupOrgUseCase {
        orgs: MockOrgRepo::new(vec![test_org()]),
    };
    let result = uc.execute("NOWHERE").await;
    assert!(matches!(result, Err(AdminServiceError::OrganizationNotFound)));
}

#[tokio::test]
async fn should_search_by_name_prefix_in_name_order() {
    let uc = SearchOrgsUseCase {
        orgs: MockOrgRepo::new(vec![
            named_org("Maple Leaf Transit", "MLT001"),
            named_org("Oak Ridge Lines", "OAK001"),
            named_org("Maple Grove Academy", "MGA001"),
        ]),
    };

    let results = uc.execute("Maple").await.unwrap();
    let names: Vec<&str> = results.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["Maple Grove Academy", "Maple Leaf Transit"]);
}

#[tokio::test]
async fn should_return_empty_list_for_short_query() {
    let uc = SearchOrgsUseCase {
        orgs: MockOrgRepo::new(vec![test_org()]),
    };
    assert!(uc.execute("M").await.unwrap().is_empty());
    assert!(uc.execute(" ").await.unwrap().is_empty());
}

#[tokio::test]
async fn should_return_empty_list_when_nothing_matches() {
    let uc = SearchOrgsUseCase {
        orgs: MockOrgRepo::new(vec![test_org()]),
    };
    assert!(uc.execute("Zenith").await.unwrap().is_empty());
}

#[tokio::test]
async fn should_cap_search_results_at_ten() {
    let orgs: Vec<Organization> = (0..12)
        .map(|i| named_org(&format!("Maple Campus {i:02}"), &format!("MC{i:03}")))
        .collect();
    let uc = SearchOrgsUseCase {
        orgs: MockOrgRepo::new(orgs),
    };

    let results = uc.execute("Maple").await.unwrap();
    assert_eq!(results.len(), 10);
}
