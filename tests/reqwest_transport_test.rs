// Round trips through the default reqwest transport against a mock
// HTTP server: URI joining, JSON bodies, and non-success status mapping.

use httpmock::prelude::*;

use baasic_profile_client::domain::links::{rel, Links};
use baasic_profile_client::error::Error;
use baasic_profile_client::models::Organization;
use baasic_profile_client::transport::TransportError;
use baasic_profile_client::{ClientSettings, FindOptions, GetOptions, ProfileClient};

fn client_for(server: &MockServer) -> ProfileClient {
    let settings = ClientSettings::new(&server.base_url(), "test-app");
    ProfileClient::new(&settings).expect("client must build")
}

#[tokio::test]
async fn test_find_round_trip() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/test-app/lookups/organizations/")
                .query_param("searchQuery", "acme")
                .query_param("page", "1")
                .query_param("rpp", "10");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"page":1,"recordsPerPage":10,"totalRecords":1,"item":[{"id":"42","name":"Acme"}]}"#);
        })
        .await;

    let client = client_for(&server);
    let collection = client
        .organizations
        .find(&FindOptions::new().with_search("acme").with_paging(1, 10))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(collection.total_records, 1);
    assert_eq!(collection.item[0].name, "Acme");
}

#[tokio::test]
async fn test_update_puts_to_hal_href() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/v1/test-app/lookups/organizations/42")
                .json_body_partial(r#"{"name": "Acme"}"#);
            then.status(200).body("{}");
        })
        .await;

    let client = client_for(&server);
    let organization = Organization {
        id: Some("42".to_string()),
        name: "Acme".to_string(),
        links: Links::new().with(rel::PUT, "lookups/organizations/42"),
        ..Default::default()
    };
    client.organizations.update(&organization).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_not_found_surfaces_as_status_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/test-app/profiles/missing/");
            then.status(404).body(r#"{"error":"not found"}"#);
        })
        .await;

    let client = client_for(&server);
    let err = client
        .profiles
        .get("missing", &GetOptions::new())
        .await
        .unwrap_err();

    match err {
        Error::Transport(TransportError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected transport status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_batch_remove_path_ids_round_trip() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/v1/test-app/lookups/organizations/batch/1,2,3");
            then.status(200).body("{}");
        })
        .await;

    let client = client_for(&server);
    let ids = vec!["1".to_string(), "2".to_string(), "3".to_string()];
    client.organizations.batch_remove(&ids).await.unwrap();

    mock.assert_async().await;
}
