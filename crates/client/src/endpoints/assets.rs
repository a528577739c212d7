//! Traversal of the Asset Framework hierarchy by link-following.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::{Credentials, maybe_auth};
use crate::endpoints::request::{decode_json, send};
use crate::error::Result;
use crate::models::{
    ApiRoot, AssetServer, Attribute, Database, Element, Items, LinkMap, Named, rel,
};

/// Dereference `links[rel]`, decode the collection, and return the first
/// item whose `Name` is byte-equal to `name`.
///
/// Absence is `Ok(None)`, never an error: the server legitimately answers
/// with a collection that simply lacks the name. A missing *link* on the
/// parent is an error, because traversal cannot proceed at all.
pub async fn get_named_child<T>(
    client: &Client,
    links: &LinkMap,
    rel: &'static str,
    name: &str,
    credentials: Option<&Credentials>,
) -> Result<Option<T>>
where
    T: DeserializeOwned + Named,
{
    let url = links.require(rel)?;
    debug!(%url, rel, name, "fetching named child");

    let builder = maybe_auth(client.get(url), credentials);
    let response = send(builder).await?;
    let collection: Items<T> = decode_json(response).await?;
    Ok(collection.find_into(name))
}

/// Find an AF server by name under the root's `AssetServers` collection.
pub async fn get_asset_server(
    client: &Client,
    root: &ApiRoot,
    name: &str,
    credentials: Option<&Credentials>,
) -> Result<Option<AssetServer>> {
    get_named_child(client, &root.links, rel::ASSET_SERVERS, name, credentials).await
}

/// Find a database by name under an AF server.
pub async fn get_database(
    client: &Client,
    server: &AssetServer,
    name: &str,
    credentials: Option<&Credentials>,
) -> Result<Option<Database>> {
    get_named_child(client, &server.links, rel::DATABASES, name, credentials).await
}

/// Find an element by name under a database.
pub async fn get_element(
    client: &Client,
    database: &Database,
    name: &str,
    credentials: Option<&Credentials>,
) -> Result<Option<Element>> {
    get_named_child(client, &database.links, rel::ELEMENTS, name, credentials).await
}

/// Find an attribute by name under an element.
pub async fn get_attribute(
    client: &Client,
    element: &Element,
    name: &str,
    credentials: Option<&Credentials>,
) -> Result<Option<Attribute>> {
    get_named_child(client, &element.links, rel::ATTRIBUTES, name, credentials).await
}

/// Resolve an attribute by its AF path (`\\SERVER\Database\Element|Attr`).
///
/// This is the one sanctioned bypass of link-following: the URL is the
/// root's `Self` link with the literal segment `attributes` appended, and
/// the hierarchical path is resolved server-side via the `path` query
/// parameter. The PI Web API root's `Self` link ends in a slash, so plain
/// concatenation is the documented contract here, not an oversight.
pub async fn get_attribute_by_path(
    client: &Client,
    root: &ApiRoot,
    path: &str,
    credentials: Option<&Credentials>,
) -> Result<Attribute> {
    let url = format!("{}attributes", root.links.self_link()?);
    debug!(%url, path, "fetching attribute by path");

    let builder = maybe_auth(client.get(&url).query(&[("path", path)]), credentials);
    let response = send(builder).await?;
    decode_json(response).await
}
