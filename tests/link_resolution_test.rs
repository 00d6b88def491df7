// Link resolver behavior: mutation targets come from the resource's own
// links, and a missing relation never turns into a network call.

mod common;

use baasic_profile_client::domain::links::{rel, resolve_link, Links};
use baasic_profile_client::error::Error;
use baasic_profile_client::models::Organization;

fn organization_with_links() -> Organization {
    Organization {
        id: Some("42".to_string()),
        name: "Acme".to_string(),
        links: Links::new()
            .with(rel::PUT, "lookups/organizations/42")
            .with(rel::DELETE, "lookups/organizations/42"),
        ..Default::default()
    }
}

#[test]
fn test_resolve_put_returns_exact_href() {
    let organization = organization_with_links();
    assert_eq!(
        resolve_link(&organization, rel::PUT).unwrap(),
        "lookups/organizations/42"
    );
}

#[test]
fn test_resolve_missing_delete_is_link_not_found() {
    let organization = Organization {
        id: Some("42".to_string()),
        name: "Acme".to_string(),
        links: Links::new().with(rel::PUT, "lookups/organizations/42"),
        ..Default::default()
    };
    let err = resolve_link(&organization, rel::DELETE).unwrap_err();
    match err {
        Error::LinkNotFound { rel, id } => {
            assert_eq!(rel, "delete");
            assert_eq!(id.as_deref(), Some("42"));
        }
        other => panic!("expected LinkNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_remove_without_delete_link_issues_no_transport_call() {
    let (client, transport) = common::test_client();
    let organization = Organization {
        id: Some("42".to_string()),
        name: "Acme".to_string(),
        ..Default::default()
    };

    let result = client.organizations.remove(&organization).await;

    assert!(matches!(result, Err(Error::LinkNotFound { .. })));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_update_without_put_link_issues_no_transport_call() {
    let (client, transport) = common::test_client();
    let organization = Organization {
        id: Some("42".to_string()),
        name: "Acme".to_string(),
        ..Default::default()
    };

    let result = client.organizations.update(&organization).await;

    assert!(matches!(result, Err(Error::LinkNotFound { .. })));
    assert!(transport.requests().is_empty());
}
