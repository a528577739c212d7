//! Reading and writing a single stream value, plus attribute metadata.

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::auth::{Credentials, maybe_auth};
use crate::endpoints::request::{decode_json, send};
use crate::error::Result;
use crate::models::{Attribute, AttributeUpdate, NewValue, StreamValue, ValueQuery, rel};

/// Read a value from the attribute's `Value` link.
///
/// An empty [`ValueQuery`] reads the current value; `time=<ISO8601>` reads
/// the value recorded at (or interpolated for) that instant.
pub async fn get_stream_value(
    client: &Client,
    attribute: &Attribute,
    query: &ValueQuery,
    credentials: Option<&Credentials>,
) -> Result<StreamValue> {
    let url = attribute.links.require(rel::VALUE)?;
    debug!(%url, time = query.time.as_deref(), "reading stream value");

    let builder = maybe_auth(client.get(url).query(query), credentials);
    let response = send(builder).await?;
    decode_json(response).await
}

/// POST a new value to the attribute's `Value` link.
///
/// Success is any 2xx status. A 202 means the write was queued, not yet
/// visible; callers that need confirmation re-read with a matching `time`
/// parameter. This is fire-and-forget, not a transaction.
pub async fn post_stream_value(
    client: &Client,
    attribute: &Attribute,
    value: &NewValue,
    credentials: Option<&Credentials>,
) -> Result<StatusCode> {
    let url = attribute.links.require(rel::VALUE)?;
    debug!(%url, timestamp = %value.timestamp, "writing stream value");

    let builder = maybe_auth(client.post(url).json(value), credentials);
    let response = send(builder).await?;
    Ok(response.status())
}

/// PATCH attribute metadata against its `Self` link.
///
/// The server applies the update synchronously and answers 204 No Content.
pub async fn patch_attribute(
    client: &Client,
    attribute: &Attribute,
    update: &AttributeUpdate,
    credentials: Option<&Credentials>,
) -> Result<StatusCode> {
    let url = attribute.links.require(rel::SELF)?;
    debug!(%url, "patching attribute metadata");

    let builder = maybe_auth(client.patch(url).json(update), credentials);
    let response = send(builder).await?;
    Ok(response.status())
}
