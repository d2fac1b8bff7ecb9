use url::Url;

use pinauth_core::flow::PinEntryLinks;

use crate::error::AuthError;

const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000";
const DEFAULT_IDENTITY_SERVER_URL: &str = "https://localhost:9443";

/// Auth configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL the end user's browser reaches this service on.
    pub public_url: Url,
    /// Base URL of the identity server that owns the flows.
    pub identity_server_url: Url,
}

impl AuthConfig {
    /// Load from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PINAUTH_PUBLIC_URL`: Base URL for the PIN-entry page (default: `http://localhost:3000`)
    /// - `IDENTITY_SERVER_URL`: Identity server base URL (default: `https://localhost:9443`)
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Config` if either value is not an absolute http(s) URL.
    pub fn from_env() -> Result<Self, AuthError> {
        Self::from_reader(|key| std::env::var(key))
    }

    /// Load from a custom variable reader, so tests need not touch the process
    /// environment.
    pub fn from_reader<F>(reader: F) -> Result<Self, AuthError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let public_url = parse_base_url(
            "PINAUTH_PUBLIC_URL",
            &reader("PINAUTH_PUBLIC_URL").unwrap_or_else(|_| DEFAULT_PUBLIC_URL.to_string()),
        )?;

        let identity_server_url = parse_base_url(
            "IDENTITY_SERVER_URL",
            &reader("IDENTITY_SERVER_URL")
                .unwrap_or_else(|_| DEFAULT_IDENTITY_SERVER_URL.to_string()),
        )?;

        Ok(Self {
            public_url,
            identity_server_url,
        })
    }

    pub fn links(&self) -> PinEntryLinks {
        PinEntryLinks::new(self.public_url.clone(), self.identity_server_url.clone())
    }
}

fn parse_base_url(key: &str, value: &str) -> Result<Url, AuthError> {
    let url = Url::parse(value).map_err(|e| AuthError::Config(format!("{key}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AuthError::Config(format!(
            "{key}: unsupported scheme '{other}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env::VarError;

    fn reader(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_default_values() {
        let config = AuthConfig::from_reader(reader(&[])).unwrap();

        assert_eq!(config.public_url.as_str(), "http://localhost:3000/");
        assert_eq!(config.identity_server_url.as_str(), "https://localhost:9443/");
    }

    #[test]
    fn test_overrides() {
        let config = AuthConfig::from_reader(reader(&[
            ("PINAUTH_PUBLIC_URL", "https://pin.example.com"),
            ("IDENTITY_SERVER_URL", "https://idp.example.com:9443"),
        ]))
        .unwrap();

        assert_eq!(config.public_url.host_str(), Some("pin.example.com"));
        assert_eq!(config.identity_server_url.port(), Some(9443));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = AuthConfig::from_reader(reader(&[("PINAUTH_PUBLIC_URL", "not a url")]))
            .unwrap_err();
        assert!(matches!(err, AuthError::Config(msg) if msg.starts_with("PINAUTH_PUBLIC_URL")));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        let err = AuthConfig::from_reader(reader(&[("IDENTITY_SERVER_URL", "mailto:a@b.c")]))
            .unwrap_err();
        assert!(matches!(err, AuthError::Config(_)));
    }

    #[test]
    fn test_links_use_configured_urls() {
        let links = AuthConfig::from_reader(reader(&[])).unwrap().links();
        assert_eq!(
            links.commonauth_url("acme").as_str(),
            "https://localhost:9443/t/acme/commonauth"
        );
    }
}
