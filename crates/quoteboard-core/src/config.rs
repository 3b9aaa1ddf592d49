//! Retrieval configuration.
//!
//! The feed address is never hardcoded at the call site: it is resolved from
//! an explicit override, then the `QUOTEBOARD_ENDPOINT` environment variable,
//! then [`DEFAULT_ENDPOINT`].

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Environment variable consulted when no explicit endpoint is given.
pub const ENDPOINT_ENV_VAR: &str = "QUOTEBOARD_ENDPOINT";

/// Public sample feed with thirty records.
pub const DEFAULT_ENDPOINT: &str =
    "https://raw.githubusercontent.com/petermooney/cs385/main/stockapi/stocks30.json";

/// Validated feed address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Endpoint(String);

impl Endpoint {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyEndpoint);
        }

        let lowered = trimmed.to_ascii_lowercase();
        let has_scheme = ["http://", "https://"]
            .iter()
            .any(|scheme| lowered.starts_with(scheme) && lowered.len() > scheme.len());
        if !has_scheme {
            return Err(ValidationError::InvalidEndpoint {
                value: input.to_owned(),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Endpoint {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Endpoint> for String {
    fn from(value: Endpoint) -> Self {
        value.0
    }
}

/// Settings for a single retrieval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub endpoint: Endpoint,
}

impl FetchConfig {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// Resolve the endpoint from `override_value`, the environment, or the default.
    pub fn resolve(override_value: Option<&str>) -> Result<Self, ValidationError> {
        let env_value = std::env::var(ENDPOINT_ENV_VAR).ok();
        Self::resolve_with(override_value, env_value.as_deref())
    }

    fn resolve_with(
        override_value: Option<&str>,
        env_value: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let raw = override_value
            .or(env_value.filter(|value| !value.trim().is_empty()))
            .unwrap_or(DEFAULT_ENDPOINT);
        Endpoint::parse(raw).map(Self::new)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint(String::from(DEFAULT_ENDPOINT)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_http_and_https_endpoints() {
        assert!(Endpoint::parse("https://example.test/stocks.json").is_ok());
        assert!(Endpoint::parse(" http://localhost:8080/feed ").is_ok());
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = Endpoint::parse("example.test/stocks.json").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidEndpoint { .. }));
        assert!(matches!(
            Endpoint::parse("https://"),
            Err(ValidationError::InvalidEndpoint { .. })
        ));
        assert_eq!(Endpoint::parse("   "), Err(ValidationError::EmptyEndpoint));
    }

    #[test]
    fn explicit_override_wins_over_environment() {
        let config = FetchConfig::resolve_with(
            Some("https://override.test/a.json"),
            Some("https://env.test/b.json"),
        )
        .expect("valid");
        assert_eq!(config.endpoint.as_str(), "https://override.test/a.json");
    }

    #[test]
    fn environment_wins_over_default() {
        let config =
            FetchConfig::resolve_with(None, Some("https://env.test/b.json")).expect("valid");
        assert_eq!(config.endpoint.as_str(), "https://env.test/b.json");
    }

    #[test]
    fn falls_back_to_default_endpoint() {
        let config = FetchConfig::resolve_with(None, Some("  ")).expect("valid");
        assert_eq!(config, FetchConfig::default());
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
    }
}
