//! High-level PI Web API walker client.

use std::time::Duration;

use reqwest::StatusCode;
use secrecy::SecretString;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints;
use crate::error::{Result, WalkError};
use crate::models::{
    ApiRoot, AssetServer, Attribute, AttributeUpdate, Database, Element, NewValue, StreamValue,
    ValueQuery,
};

/// Builder for creating a new [`PiWebClient`].
pub struct PiWebClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    accept_invalid_certs: bool,
    timeout: Duration,
}

impl Default for PiWebClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            accept_invalid_certs: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl PiWebClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the PI Web API host. A bare hostname is promoted
    /// to `https://{host}`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Use basic-auth credentials on every request.
    pub fn basic_auth(mut self, username: impl Into<String>, password: SecretString) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Accept invalid TLS certificates. INSECURE: this reproduces the
    /// classic `verify=False` behavior and must stay an explicit opt-in,
    /// never a default.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set the per-request timeout (default 30s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalize a base URL: trim trailing slashes so endpoint paths can be
    /// appended without doubling, and prepend `https://` to a bare host.
    fn normalize_base_url(url: String) -> String {
        let url = url.trim_end_matches('/').to_string();
        if url.starts_with("http://") || url.starts_with("https://") {
            url
        } else {
            format!("https://{}", url)
        }
    }

    /// Build the client.
    pub fn build(self) -> Result<PiWebClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| WalkError::InvalidUrl("base_url is required".to_string()))?;
        if base_url.trim().is_empty() {
            return Err(WalkError::InvalidUrl("base_url is empty".to_string()));
        }
        let base_url = Self::normalize_base_url(base_url);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(5));

        if self.accept_invalid_certs && base_url.starts_with("https://") {
            debug!("TLS certificate verification disabled");
            http_builder = http_builder.danger_accept_invalid_certs(true);
        }

        let http = http_builder.build()?;

        Ok(PiWebClient {
            http,
            base_url,
            credentials: self.credentials,
        })
    }
}

/// PI Web API hypermedia client.
///
/// Stateless beyond its connection settings: every method issues one
/// request, takes the previous response as input, and derives the next URL
/// from that response's link map. Responses are discard-after-use; there is
/// no cache and no retry.
#[derive(Debug)]
pub struct PiWebClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Option<Credentials>,
}

impl PiWebClient {
    /// Create a new client builder.
    pub fn builder() -> PiWebClientBuilder {
        PiWebClientBuilder::new()
    }

    /// Fetch the API root document, the fixed entry point of the link graph.
    pub async fn api_root(&self) -> Result<ApiRoot> {
        endpoints::get_api_root(&self.http, &self.base_url, self.credentials.as_ref()).await
    }

    /// Find an AF server by name. `Ok(None)` when the name is absent.
    pub async fn asset_server(&self, root: &ApiRoot, name: &str) -> Result<Option<AssetServer>> {
        endpoints::get_asset_server(&self.http, root, name, self.credentials.as_ref()).await
    }

    /// Find a database by name under an AF server.
    pub async fn database(&self, server: &AssetServer, name: &str) -> Result<Option<Database>> {
        endpoints::get_database(&self.http, server, name, self.credentials.as_ref()).await
    }

    /// Find an element by name under a database.
    pub async fn element(&self, database: &Database, name: &str) -> Result<Option<Element>> {
        endpoints::get_element(&self.http, database, name, self.credentials.as_ref()).await
    }

    /// Find an attribute by name under an element.
    pub async fn attribute(&self, element: &Element, name: &str) -> Result<Option<Attribute>> {
        endpoints::get_attribute(&self.http, element, name, self.credentials.as_ref()).await
    }

    /// Resolve an attribute by AF path (`\\SERVER\Database\Element|Attr`),
    /// bypassing the chained traversal. See
    /// [`endpoints::get_attribute_by_path`] for why this one URL is built
    /// by concatenation.
    pub async fn attribute_by_path(&self, root: &ApiRoot, path: &str) -> Result<Attribute> {
        endpoints::get_attribute_by_path(&self.http, root, path, self.credentials.as_ref()).await
    }

    /// Chain the full traversal root -> server -> database -> element ->
    /// attribute, converting the first absent name into a descriptive
    /// [`WalkError::NotFound`] instead of handing back a `None` that would
    /// fault several calls later.
    pub async fn walk(
        &self,
        server: &str,
        database: &str,
        element: &str,
        attribute: &str,
    ) -> Result<Attribute> {
        let root = self.api_root().await?;

        let af_server = self
            .asset_server(&root, server)
            .await?
            .ok_or_else(|| not_found(AssetServer::KIND, server))?;
        let af_database = self
            .database(&af_server, database)
            .await?
            .ok_or_else(|| not_found(Database::KIND, database))?;
        let af_element = self
            .element(&af_database, element)
            .await?
            .ok_or_else(|| not_found(Element::KIND, element))?;
        self.attribute(&af_element, attribute)
            .await?
            .ok_or_else(|| not_found(Attribute::KIND, attribute))
    }

    /// Read the attribute's current value.
    pub async fn current_value(&self, attribute: &Attribute) -> Result<StreamValue> {
        endpoints::get_stream_value(
            &self.http,
            attribute,
            &ValueQuery::current(),
            self.credentials.as_ref(),
        )
        .await
    }

    /// Read the value recorded at (or interpolated for) the given ISO-8601
    /// instant.
    pub async fn recorded_value(&self, attribute: &Attribute, time: &str) -> Result<StreamValue> {
        endpoints::get_stream_value(
            &self.http,
            attribute,
            &ValueQuery::at(time),
            self.credentials.as_ref(),
        )
        .await
    }

    /// Write a value to the attribute's stream. Returns the HTTP status;
    /// 202 means accepted but not yet visible, so a caller that needs
    /// confirmation re-reads with the written timestamp.
    pub async fn write_value(&self, attribute: &Attribute, value: &NewValue) -> Result<StatusCode> {
        endpoints::post_stream_value(&self.http, attribute, value, self.credentials.as_ref()).await
    }

    /// Patch attribute metadata. 204 means the update was applied
    /// synchronously; a re-fetch of the attribute observes it.
    pub async fn update_attribute(
        &self,
        attribute: &Attribute,
        update: &AttributeUpdate,
    ) -> Result<StatusCode> {
        endpoints::patch_attribute(&self.http, attribute, update, self.credentials.as_ref()).await
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn not_found(kind: &'static str, name: &str) -> WalkError {
    WalkError::NotFound {
        kind,
        name: name.to_string(),
    }
}
