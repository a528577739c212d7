//! Configuration errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting is missing from every source.
    #[error("Missing required setting: {0} (set {1})")]
    MissingValue(&'static str, &'static str),

    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// The configured base URL does not parse.
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    /// A `.env` file exists but could not be read.
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}
