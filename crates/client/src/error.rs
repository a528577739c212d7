//! Error types for the PI Web API walker.

use thiserror::Error;

/// Result type alias for walker operations.
pub type Result<T> = std::result::Result<T, WalkError>;

/// Errors that can occur while traversing the PI Web API link graph.
#[derive(Error, Debug)]
pub enum WalkError {
    /// Connection or TLS failure before a response was obtained.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not JSON, or did not match the expected schema.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Non-2xx response from the PI Web API.
    #[error("API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// The parent response carries no hyperlink with the given relation name.
    #[error("Response has no '{rel}' link")]
    MissingLink { rel: &'static str },

    /// A named child that the caller required was absent from the collection.
    #[error("{kind} '{name}' not found")]
    NotFound { kind: &'static str, name: String },

    /// Invalid base URL or hyperlink.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl WalkError {
    /// Check if this error means a resource was looked up but absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Api { status: 404, .. }
        )
    }

    /// Check if this error originated below the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
