use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flags passed through from the CLI; each one overrides env and defaults.
#[derive(Debug, Clone, Default)]
pub struct ServerCliFlags {
    pub listen: Option<String>,
    pub backend_url: Option<String>,
    pub mock: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the proxy listens on.
    pub listen: String,
    /// Base URL of the analysis backend requests are forwarded to.
    pub backend_url: String,
    /// Serve canned fixture responses instead of forwarding.
    pub mock: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "127.0.0.1:7878".to_string(),
            backend_url: "http://127.0.0.1:8000".to_string(),
            mock: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServerConfigValidationError {
    #[error("listen address '{0}' is not a valid socket address")]
    InvalidListenAddress(String),
    #[error("backend_url cannot be empty")]
    EmptyBackendUrl,
    #[error("backend_url '{0}' must start with http:// or https://")]
    InvalidBackendUrl(String),
}

impl ServerConfig {
    /// Resolve the effective config: defaults, then environment, then CLI
    /// flags, then validation.
    pub fn load(cli: &ServerCliFlags) -> Result<Self, ServerConfigValidationError> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.apply_cli_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(listen) = std::env::var("REVBOT_LISTEN")
            && !listen.trim().is_empty()
        {
            self.listen = listen;
        }
        if let Ok(url) = std::env::var("BACKEND_URL")
            && !url.trim().is_empty()
        {
            self.backend_url = url;
        }
        if let Ok(mock) = std::env::var("REVBOT_MOCK_BACKEND") {
            self.mock = matches!(mock.trim(), "1" | "true" | "yes");
        }
    }

    fn apply_cli_overrides(&mut self, cli: &ServerCliFlags) {
        if let Some(listen) = &cli.listen {
            self.listen = listen.clone();
        }
        if let Some(url) = &cli.backend_url {
            self.backend_url = url.clone();
        }
        if cli.mock {
            self.mock = true;
        }
    }

    pub fn validate(&self) -> Result<(), ServerConfigValidationError> {
        if self.listen.parse::<SocketAddr>().is_err() {
            return Err(ServerConfigValidationError::InvalidListenAddress(
                self.listen.clone(),
            ));
        }
        if self.backend_url.trim().is_empty() {
            return Err(ServerConfigValidationError::EmptyBackendUrl);
        }
        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err(ServerConfigValidationError::InvalidBackendUrl(
                self.backend_url.clone(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_loopback() {
        let config = ServerConfig::default();
        assert_eq!(config.listen, "127.0.0.1:7878");
        assert_eq!(config.backend_url, "http://127.0.0.1:8000");
        assert!(!config.mock);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn cli_flags_override_defaults() {
        let mut config = ServerConfig::default();
        config.apply_cli_overrides(&ServerCliFlags {
            listen: Some("0.0.0.0:9000".to_string()),
            backend_url: Some("https://analysis.internal".to_string()),
            mock: true,
        });
        assert_eq!(config.listen, "0.0.0.0:9000");
        assert_eq!(config.backend_url, "https://analysis.internal");
        assert!(config.mock);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_unparseable_listen_address() {
        let config = ServerConfig {
            listen: "not-an-addr".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ServerConfigValidationError::InvalidListenAddress(
                "not-an-addr".to_string()
            ))
        );
    }

    #[test]
    fn rejects_backend_url_without_scheme() {
        let config = ServerConfig {
            backend_url: "analysis.internal:8000".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ServerConfigValidationError::InvalidBackendUrl(_))
        ));
    }
}
