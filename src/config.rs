//! Configuration types.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Honeypot service configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct HoneypotConfig {
    /// TCP port for the inbound HTTP listener.
    pub port: u16,
    /// Shared secret expected in the `x-api-key` header.
    ///
    /// When unset, every request is rejected as unauthorized — an
    /// unconfigured honeypot must not engage anyone.
    pub api_key: Option<SecretString>,
    /// Endpoint for outbound escalation reports. When unset, escalation
    /// decisions are still made and logged but nothing is dispatched.
    pub report_url: Option<String>,
}

impl HoneypotConfig {
    /// Build configuration from environment variables.
    ///
    /// - `PORT` — listener port (default 3000)
    /// - `API_KEY` — inbound shared secret
    /// - `REPORT_URL` — escalation endpoint
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok())?;

        let api_key = std::env::var("API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .map(SecretString::from);

        let report_url = std::env::var("REPORT_URL")
            .ok()
            .filter(|u| !u.is_empty());

        Ok(Self {
            port,
            api_key,
            report_url,
        })
    }
}

impl Default for HoneypotConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            api_key: None,
            report_url: None,
        }
    }
}

fn parse_port(raw: Option<String>) -> Result<u16, ConfigError> {
    match raw {
        None => Ok(3000),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
            key: "PORT".to_string(),
            message: format!("not a valid port: {value:?}"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 3000);
    }

    #[test]
    fn port_parses_when_valid() {
        assert_eq!(parse_port(Some("8080".into())).unwrap(), 8080);
    }

    #[test]
    fn garbage_port_is_a_config_error() {
        assert!(parse_port(Some("eighty".into())).is_err());
        assert!(parse_port(Some("99999".into())).is_err());
    }
}
