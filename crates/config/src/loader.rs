//! Environment-driven configuration loading.
//!
//! Sources, in precedence order: explicit setters (tests, CLI flags) over
//! process environment over `.env` file over built-in defaults.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables count as unset.
//! - Invalid numeric or boolean values fail with `InvalidValue` naming the
//!   variable, they are never silently defaulted.

use secrecy::SecretString;
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;
use crate::types::WalkerConfig;

pub const ENV_BASE_URL: &str = "PIWEB_BASE_URL";
pub const ENV_VERIFY_TLS: &str = "PIWEB_VERIFY_TLS";
pub const ENV_TIMEOUT: &str = "PIWEB_TIMEOUT";
pub const ENV_USERNAME: &str = "PIWEB_USERNAME";
pub const ENV_PASSWORD: &str = "PIWEB_PASSWORD";

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returned values are trimmed.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Builder that accumulates settings and resolves a [`WalkerConfig`].
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    verify_tls: Option<bool>,
    timeout: Option<Duration>,
    username: Option<String>,
    password: Option<SecretString>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the working directory if one exists.
    /// A missing file is fine; an unreadable one is not.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => Ok(()),
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::DotenvError(e.to_string())),
        }
    }

    pub fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub fn set_verify_tls(&mut self, verify: Option<bool>) {
        self.verify_tls = verify;
    }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    /// Apply process environment variables to any setting not already set
    /// explicitly.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if self.base_url.is_none() {
            self.base_url = env_var_or_none(ENV_BASE_URL);
        }
        if self.verify_tls.is_none()
            && let Some(raw) = env_var_or_none(ENV_VERIFY_TLS)
        {
            self.verify_tls = Some(raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_VERIFY_TLS.to_string(),
                message: "must be true or false".to_string(),
            })?);
        }
        if self.timeout.is_none()
            && let Some(raw) = env_var_or_none(ENV_TIMEOUT)
        {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_TIMEOUT.to_string(),
                message: "must be a number of seconds".to_string(),
            })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        if self.username.is_none() {
            self.username = env_var_or_none(ENV_USERNAME);
        }
        if self.password.is_none() {
            self.password = env_var_or_none(ENV_PASSWORD).map(|p| SecretString::new(p.into()));
        }
        Ok(())
    }

    /// Resolve the final configuration.
    pub fn build(self) -> Result<WalkerConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingValue("base URL", ENV_BASE_URL))?;

        // A bare host is acceptable; validate after scheme promotion.
        let candidate = if base_url.starts_with("http://") || base_url.starts_with("https://") {
            base_url.clone()
        } else {
            format!("https://{}", base_url)
        };
        Url::parse(&candidate).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;

        Ok(WalkerConfig {
            base_url,
            verify_tls: self.verify_tls.unwrap_or(true),
            timeout: self.timeout.unwrap_or(WalkerConfig::DEFAULT_TIMEOUT),
            username: self.username,
            password: self.password,
        })
    }
}
