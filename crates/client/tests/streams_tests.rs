//! Stream value read/write and attribute metadata tests.

mod common;

use common::*;
use piwalk_client::models::Element;
use wiremock::matchers::{body_json, method, path, query_param};

const VALUE_PATH: &str = "/piwebapi/streams/A0FmQS1NeUF0dHJpYnV0ZQ/value";
const SELF_PATH: &str = "/piwebapi/attributes/A0FmQS1NeUF0dHJpYnV0ZQ";

/// Build the demo attribute straight from its fixture, links pointing at
/// the mock server.
fn demo_attribute(mock_server: &MockServer) -> Attribute {
    serde_json::from_value(fixture_with_base(
        "assets/attribute_by_path.json",
        &mock_server.uri(),
    ))
    .unwrap()
}

#[tokio::test]
async fn test_read_current_value() {
    let mock_server = MockServer::start().await;
    let attribute = demo_attribute(&mock_server);

    Mock::given(method("GET"))
        .and(path(VALUE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("streams/current_value.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let value = endpoints::get_stream_value(&client, &attribute, &ValueQuery::current(), None)
        .await
        .unwrap();

    assert_eq!(value.timestamp, "2015-06-02T21:05:19Z");
    assert_eq!(value.value, serde_json::json!(1.0));
    assert!(value.good);
    assert!(!value.substituted);
    assert_eq!(value.units_abbreviation, "");
}

#[tokio::test]
async fn test_historical_read_sends_time_parameter() {
    let mock_server = MockServer::start().await;
    let attribute = demo_attribute(&mock_server);

    Mock::given(method("GET"))
        .and(path(VALUE_PATH))
        .and(query_param("time", "2015-06-03T00:00:00"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("streams/recorded_value.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let value = endpoints::get_stream_value(
        &client,
        &attribute,
        &ValueQuery::at("2015-06-03T00:00:00"),
        None,
    )
    .await
    .unwrap();

    assert_eq!(value.value, serde_json::json!(25.0));
    assert_eq!(value.parsed_timestamp().unwrap().timestamp(), 1433289600);
}

#[tokio::test]
async fn test_write_then_read_back_round_trip() {
    let mock_server = MockServer::start().await;
    let attribute = demo_attribute(&mock_server);

    let new_value = NewValue::new("2015-06-03T00:00:00", "25.0");

    // The server acknowledges the queued write with 202; visibility is
    // eventual, so the confirmation is a re-read at the written timestamp.
    Mock::given(method("POST"))
        .and(path(VALUE_PATH))
        .and(body_json(
            serde_json::json!({"Timestamp": "2015-06-03T00:00:00", "Value": "25.0"}),
        ))
        .respond_with(ResponseTemplate::new(202))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path(VALUE_PATH))
        .and(query_param("time", "2015-06-03T00:00:00"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("streams/recorded_value.json")),
        )
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let status = endpoints::post_stream_value(&client, &attribute, &new_value, None)
        .await
        .unwrap();
    assert_eq!(status.as_u16(), 202);

    let read_back = endpoints::get_stream_value(
        &client,
        &attribute,
        &ValueQuery::at("2015-06-03T00:00:00"),
        None,
    )
    .await
    .unwrap();
    assert_eq!(read_back.value, serde_json::json!(25.0));
    assert_eq!(read_back.timestamp, "2015-06-03T00:00:00Z");
}

#[tokio::test]
async fn test_patch_then_refetch_shows_description() {
    let mock_server = MockServer::start().await;
    let attribute = demo_attribute(&mock_server);

    Mock::given(method("PATCH"))
        .and(path(SELF_PATH))
        .and(body_json(serde_json::json!({"Description": "Hello world"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    // After the synchronous 204, a fresh collection fetch observes the
    // new description.
    let mut updated = fixture_with_base("assets/attributes.json", &mock_server.uri());
    updated["Items"][0]["Description"] = serde_json::json!("Hello world");
    Mock::given(method("GET"))
        .and(path("/piwebapi/elements/E0FmRS1NeUVsZW1lbnQ/attributes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&updated))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let status = endpoints::patch_attribute(
        &client,
        &attribute,
        &AttributeUpdate::description("Hello world"),
        None,
    )
    .await
    .unwrap();
    assert_eq!(status.as_u16(), 204);

    let element: Element = serde_json::from_value(
        fixture_with_base("assets/elements.json", &mock_server.uri())["Items"][0].clone(),
    )
    .unwrap();
    let refetched = endpoints::get_attribute(&client, &element, "MyAttribute", None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(refetched.description.as_deref(), Some("Hello world"));
}

#[tokio::test]
async fn test_value_read_without_value_link_fails() {
    let mock_server = MockServer::start().await;
    let mut attribute = demo_attribute(&mock_server);
    attribute.links = Default::default();

    let client = Client::new();
    let err = endpoints::get_stream_value(&client, &attribute, &ValueQuery::current(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, WalkError::MissingLink { rel: "Value" }));
}
