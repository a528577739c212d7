//! Shared request plumbing: status mapping and JSON decoding.

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, WalkError};

/// Error body shape the PI Web API returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
struct PiErrors {
    #[serde(rename = "Errors", default)]
    errors: Vec<String>,
}

/// Execute a request and map any non-2xx status into a tagged `Api` error,
/// extracting the server's `Errors` list when the body carries one.
pub async fn send(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    let status = response.status();
    debug!(status = status.as_u16(), url = %response.url(), "piwebapi response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<PiErrors>(&body) {
        Ok(parsed) if !parsed.errors.is_empty() => parsed.errors.join("; "),
        _ => body,
    };

    Err(WalkError::Api {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Read the response body and decode it, mapping malformed JSON or a schema
/// mismatch to a `Protocol` error that names the offending URL.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| WalkError::Protocol(format!("Bad response body from {}: {}", url, e)))
}
