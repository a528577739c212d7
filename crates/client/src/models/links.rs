//! Hyperlink maps embedded in PI Web API responses.
//!
//! Every non-terminal response carries a `Links` object mapping relation
//! names to absolute URLs. Navigation happens exclusively through this map;
//! clients never template URLs themselves (the by-path attribute lookup is
//! the one documented exception, see `endpoints::assets`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, WalkError};

/// Relation names the walker dereferences.
pub mod rel {
    pub const SELF: &str = "Self";
    pub const ASSET_SERVERS: &str = "AssetServers";
    pub const DATABASES: &str = "Databases";
    pub const ELEMENTS: &str = "Elements";
    pub const ATTRIBUTES: &str = "Attributes";
    pub const VALUE: &str = "Value";
}

/// The `Links` object of a response: relation name -> absolute URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkMap(pub BTreeMap<String, String>);

impl LinkMap {
    /// Look up a relation, `None` if the server did not provide it.
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.0.get(rel).map(String::as_str)
    }

    /// Look up a relation that the caller cannot proceed without.
    pub fn require(&self, rel: &'static str) -> Result<&str> {
        self.get(rel).ok_or(WalkError::MissingLink { rel })
    }

    /// The `Self` link of this resource.
    pub fn self_link(&self) -> Result<&str> {
        self.require(rel::SELF)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
