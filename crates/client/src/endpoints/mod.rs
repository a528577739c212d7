//! PI Web API endpoint implementations.
//!
//! Free async functions over a borrowed `reqwest::Client`: one request per
//! call, typed model out, no state kept between calls. Navigation derives
//! every URL from the previous response's link map; only [`root`] builds a
//! URL from scratch, and [`assets::get_attribute_by_path`] is the single
//! documented concatenation exception.

mod assets;
pub mod request;
mod root;
mod streams;

pub use assets::{
    get_asset_server, get_attribute, get_attribute_by_path, get_database, get_element,
    get_named_child,
};
pub use root::get_api_root;
pub use streams::{get_stream_value, patch_attribute, post_stream_value};
