//! Typed views of the Asset Framework resources the walker traverses.
//!
//! Each struct keeps the scalar fields we read plus the `Links` map; every
//! other field the server returns is ignored. Responses are ephemeral:
//! decoded, consumed, discarded. Nothing here is mutated in place --
//! mutation goes through a fresh PATCH/POST and a re-fetch.

use serde::{Deserialize, Serialize};

use super::links::LinkMap;

/// A resource that can be looked up by `Name` inside a collection.
pub trait Named {
    fn name(&self) -> &str;
}

/// The root document at `GET /piwebapi`.
///
/// Terminal fields are irrelevant here; the root exists purely to hand out
/// the entry links (`AssetServers`, `Self`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiRoot {
    #[serde(rename = "Links", default)]
    pub links: LinkMap,
}

/// A collection response: `{"Items": [...], "Links": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Items<T> {
    #[serde(rename = "Items", default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(rename = "Links", default)]
    pub links: LinkMap,
}

impl<T: Named> Items<T> {
    /// First item whose `Name` is byte-equal to `name`, in server order.
    /// Absence is not an error at this layer.
    pub fn find(&self, name: &str) -> Option<&T> {
        self.items.iter().find(|item| item.name() == name)
    }

    /// Like [`find`](Self::find) but consuming, so the match can be
    /// returned without cloning the rest of the collection.
    pub fn find_into(self, name: &str) -> Option<T> {
        self.items.into_iter().find(|item| item.name() == name)
    }
}

macro_rules! af_resource {
    ($(#[$doc:meta])* $name:ident, $kind:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Serialize, Deserialize)]
        pub struct $name {
            #[serde(rename = "WebId", default)]
            pub web_id: Option<String>,
            #[serde(rename = "Id", default)]
            pub id: Option<String>,
            #[serde(rename = "Name")]
            pub name: String,
            #[serde(rename = "Description", default)]
            pub description: Option<String>,
            #[serde(rename = "Path", default)]
            pub path: Option<String>,
            #[serde(rename = "Links", default)]
            pub links: LinkMap,
        }

        impl Named for $name {
            fn name(&self) -> &str {
                &self.name
            }
        }

        impl $name {
            /// Noun used in `NotFound` errors for this resource level.
            pub const KIND: &'static str = $kind;
        }
    };
}

af_resource!(
    /// An AF server entry from the `AssetServers` collection.
    AssetServer,
    "asset server"
);
af_resource!(
    /// An asset database under an AF server.
    Database,
    "database"
);
af_resource!(
    /// An AF element under a database.
    Element,
    "element"
);
af_resource!(
    /// An AF attribute under an element. Its `Value` link is the entry
    /// point to the time series; its `Self` link accepts metadata PATCHes.
    Attribute,
    "attribute"
);
