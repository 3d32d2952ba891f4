//! Secure credential handling for LLM providers.
//!
//! - **No accidental logging**: credentials cannot appear in Debug output
//! - **Memory safety**: values are zeroed on drop via the `secrecy` crate
//! - **Explicit exposure**: the raw value is only reachable through
//!   [`ApiCredential::expose`], at the point of use

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

use super::ProviderError;

/// Where a credential was loaded from.
///
/// Useful for debugging configuration issues without exposing the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Loaded from environment variable
    Environment,
    /// Provided programmatically
    Programmatic,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "environment"),
            CredentialSource::Programmatic => write!(f, "programmatic"),
        }
    }
}

/// A securely-stored API credential.
pub struct ApiCredential {
    value: SecretString,
    source: CredentialSource,
    name: &'static str,
}

impl ApiCredential {
    /// Wrap a credential value. After this point it cannot be accidentally
    /// logged or printed.
    pub fn new(value: impl Into<String>, source: CredentialSource, name: &'static str) -> Self {
        Self {
            value: SecretString::from(value.into()),
            source,
            name,
        }
    }

    /// Load a credential from an environment variable.
    ///
    /// `name` is the human-readable name used in error messages, e.g.
    /// "Anthropic API key". The variable's value is never logged.
    pub fn from_env(env_var: &str, name: &'static str) -> Result<Self, ProviderError> {
        std::env::var(env_var)
            .map(|v| Self::new(v, CredentialSource::Environment, name))
            .map_err(|_| {
                ProviderError::NotConfigured(format!(
                    "{name} not set: configure '{env_var}' environment variable"
                ))
            })
    }

    /// Expose the raw credential value. Call this only at the point of use,
    /// e.g. when setting an HTTP header.
    pub fn expose(&self) -> &str {
        self.value.expose_secret()
    }

    /// Whether the stored value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.expose_secret().is_empty()
    }

    /// Where this credential came from.
    pub fn source(&self) -> CredentialSource {
        self.source
    }
}

impl fmt::Debug for ApiCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredential")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_value() {
        let cred = ApiCredential::new(
            "sk-super-secret",
            CredentialSource::Programmatic,
            "test key",
        );
        let debug = format!("{cred:?}");
        assert!(!debug.contains("sk-super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_expose_returns_value() {
        let cred = ApiCredential::new("sk-key", CredentialSource::Programmatic, "test key");
        assert_eq!(cred.expose(), "sk-key");
        assert!(!cred.is_empty());
    }

    #[test]
    fn test_missing_env_var_is_not_configured() {
        let result = ApiCredential::from_env("DISEQUA_TEST_MISSING_VAR", "test key");
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }

    #[test]
    fn test_source_is_tracked() {
        let cred = ApiCredential::new("k", CredentialSource::Programmatic, "test key");
        assert_eq!(cred.source(), CredentialSource::Programmatic);
        assert_eq!(cred.source().to_string(), "programmatic");
    }
}
