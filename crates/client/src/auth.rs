//! Optional basic-auth credentials, threaded through each request.
//!
//! There is no session management here: the PI Web API examples this client
//! targets authenticate per request (or not at all, on Kerberos-fronted
//! deployments). Anything fancier is out of scope.

use secrecy::{ExposeSecret, SecretString};

/// Username/password pair applied to outgoing requests.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    /// Attach these credentials to a request builder.
    pub fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}

/// Apply credentials when present, pass the builder through otherwise.
pub fn maybe_auth(
    builder: reqwest::RequestBuilder,
    credentials: Option<&Credentials>,
) -> reqwest::RequestBuilder {
    match credentials {
        Some(c) => c.apply(builder),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_do_not_leak_in_debug() {
        let creds = Credentials::new("operator", SecretString::new("hunter2".to_string().into()));
        let rendered = format!("{:?}", creds);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("operator"));
    }
}
