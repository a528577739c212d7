//! Configuration types for the PI Web API walker.

use secrecy::SecretString;
use std::time::Duration;

/// Resolved connection configuration.
///
/// Hostnames and credentials are never hard-coded; they arrive here from
/// the environment (or from explicit setters in tests) and are passed into
/// every entry point that needs them.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Base URL of the PI Web API host, e.g. `https://pi.example.com`.
    pub base_url: String,
    /// Verify TLS certificates. Disabling this is an explicit, logged
    /// choice, never a default.
    pub verify_tls: bool,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Optional basic-auth username.
    pub username: Option<String>,
    /// Optional basic-auth password.
    pub password: Option<SecretString>,
}

impl WalkerConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// True when both a username and a password are configured.
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }
}
