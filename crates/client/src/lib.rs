//! PI Web API hypermedia walker.
//!
//! This crate traverses the hierarchical PI Web API by following the links
//! each response hands out (root -> asset server -> database -> element ->
//! attribute -> value), then reads and writes a single time-series value
//! and patches attribute metadata. The server's link graph is the source
//! of truth: no URL is templated client-side except the fixed root and the
//! documented attribute-by-path shortcut.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Credentials;
pub use client::{PiWebClient, PiWebClientBuilder};
pub use error::{Result, WalkError};
pub use models::{
    ApiRoot, AssetServer, Attribute, AttributeUpdate, Database, Element, Items, LinkMap, NewValue,
    StreamValue, ValueQuery, rel,
};
