//! Configuration management for the PI Web API walker.
//!
//! Connection settings (host, TLS verification, timeout, optional
//! credentials) come from environment variables and `.env` files; nothing
//! is ever hard-coded.

mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{
    ConfigLoader, ENV_BASE_URL, ENV_PASSWORD, ENV_TIMEOUT, ENV_USERNAME, ENV_VERIFY_TLS,
    env_var_or_none,
};
pub use types::WalkerConfig;
