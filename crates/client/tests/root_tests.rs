//! API root endpoint tests.
//!
//! The root is the only URL the walker constructs itself; everything else
//! comes out of the link maps the server returns.

mod common;

use common::*;
use piwalk_client::rel;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_api_root_exposes_entry_links() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/piwebapi"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixture_with_base("root/get_api_root.json", &mock_server.uri())),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let root = endpoints::get_api_root(&client, &mock_server.uri(), None)
        .await
        .unwrap();

    // Every valid root carries at least Self and AssetServers.
    assert!(root.links.get(rel::SELF).is_some());
    assert!(root.links.get(rel::ASSET_SERVERS).is_some());
    assert_eq!(
        root.links.get(rel::ASSET_SERVERS).unwrap(),
        format!("{}/piwebapi/assetservers", mock_server.uri())
    );
}

#[tokio::test]
async fn test_api_root_non_json_body_is_protocol_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/piwebapi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy login page</html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_api_root(&client, &mock_server.uri(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, WalkError::Protocol(_)));
}

#[tokio::test]
async fn test_api_root_connection_failure_is_transport_error() {
    // Nothing listens here; the request dies below the HTTP layer.
    let client = Client::new();
    let err = endpoints::get_api_root(&client, "http://127.0.0.1:1", None)
        .await
        .unwrap_err();

    assert!(err.is_transport());
}
