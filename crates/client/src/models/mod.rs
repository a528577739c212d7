//! Typed models for PI Web API responses and request bodies.

pub mod links;
pub mod resources;
pub mod streams;

pub use links::{LinkMap, rel};
pub use resources::{ApiRoot, AssetServer, Attribute, Database, Element, Items, Named};
pub use streams::{AttributeUpdate, NewValue, StreamValue, ValueQuery};
