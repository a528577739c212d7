//! Common test utilities for integration tests.
//!
//! Fixtures live under `fixtures/` at the crate root. Their link URLs use
//! the `{base_url}` placeholder, substituted with the wiremock server's
//! address at mount time so that hypermedia traversal actually lands on
//! the mock.

// Re-export test utilities from piwalk-client
#[allow(unused_imports)]
pub use piwalk_client::testing::load_fixture;

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use piwalk_client::{
    Attribute, AttributeUpdate, NewValue, PiWebClient, StreamValue, ValueQuery, WalkError,
    endpoints, models,
};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Load a fixture and substitute `{base_url}` in its link URLs.
#[allow(dead_code)]
pub fn fixture_with_base(fixture_path: &str, base_url: &str) -> serde_json::Value {
    let raw = load_fixture(fixture_path)
        .to_string()
        .replace("{base_url}", base_url);
    serde_json::from_str(&raw).expect("Fixture no longer valid JSON after substitution")
}

/// Mount the full asset hierarchy (root, servers, databases, elements,
/// attributes) on the mock server and return a client pointed at it.
#[allow(dead_code)]
pub async fn mount_hierarchy(mock_server: &MockServer) -> PiWebClient {
    use wiremock::matchers::{method, path};

    let mounts = [
        ("/piwebapi", "root/get_api_root.json"),
        ("/piwebapi/assetservers", "assets/asset_servers.json"),
        (
            "/piwebapi/assetservers/S0FmUy1TUlYtUEkwMQ/assetdatabases",
            "assets/databases.json",
        ),
        (
            "/piwebapi/assetdatabases/D0FmRC1TYW5kYm94/elements",
            "assets/elements.json",
        ),
        (
            "/piwebapi/elements/E0FmRS1NeUVsZW1lbnQ/attributes",
            "assets/attributes.json",
        ),
    ];

    for (route, fixture) in mounts {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(fixture_with_base(fixture, &mock_server.uri())),
            )
            .mount(mock_server)
            .await;
    }

    PiWebClient::builder()
        .base_url(mock_server.uri())
        .build()
        .expect("client builds against mock server")
}
