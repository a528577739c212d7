//! The fixed entry point of the link graph.

use reqwest::Client;
use tracing::debug;

use crate::auth::{Credentials, maybe_auth};
use crate::endpoints::request::{decode_json, send};
use crate::error::Result;
use crate::models::ApiRoot;

/// Fetch the API root document at `GET {base_url}/piwebapi`.
///
/// This is the only URL a client is allowed to construct itself; every
/// further step follows a link handed out by the server.
pub async fn get_api_root(
    client: &Client,
    base_url: &str,
    credentials: Option<&Credentials>,
) -> Result<ApiRoot> {
    let url = format!("{}/piwebapi", base_url);
    debug!(%url, "fetching api root");

    let builder = maybe_auth(client.get(&url), credentials);
    let response = send(builder).await?;
    decode_json(response).await
}
