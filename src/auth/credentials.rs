//! Credential management for Binance API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "BINANCE_API_KEY";

/// Default environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BINANCE_API_SECRET";

/// API credentials containing the key and an optional secret.
///
/// The key travels in the `X-MBX-APIKEY` header. The secret never leaves the
/// process: it only keys the request signature.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The API secret (private, used for signing)
    api_secret: Option<SecretString>,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    ///
    /// An empty secret counts as no secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        let api_secret = api_secret.into();
        Self {
            api_key: api_key.into(),
            api_secret: (!api_secret.is_empty()).then(|| SecretString::from(api_secret)),
        }
    }

    /// Create credentials carrying only the API key.
    ///
    /// Such credentials can call endpoints that need the key header but no
    /// signature; signed calls fail with `MissingCredentials`.
    pub fn api_key_only(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: None,
        }
    }

    /// Whether a secret is configured.
    pub fn has_secret(&self) -> bool {
        self.api_secret.is_some()
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> Option<&str> {
        self.api_secret.as_ref().map(|s| s.expose_secret())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secret = if self.api_secret.is_some() {
            "[REDACTED]"
        } else {
            "None"
        };
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &secret)
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager or a local configuration file.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `BINANCE_API_KEY` and `BINANCE_API_SECRET`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from default environment variables.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env() -> Self {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Self {
        let api_key = std::env::var(key_var)
            .unwrap_or_else(|_| panic!("Environment variable {key_var} not set"));
        let api_secret = std::env::var(secret_var)
            .unwrap_or_else(|_| panic!("Environment variable {secret_var} not set"));

        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }

    /// Try to create credentials from default environment variables.
    ///
    /// Returns `None` if the key variable is not set. A missing secret
    /// yields key-only credentials.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_KEY_VAR, API_SECRET_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let credentials = match std::env::var(secret_var) {
            Ok(secret) => Credentials::new(api_key, secret),
            Err(_) => Credentials::api_key_only(api_key),
        };

        Some(Self { credentials })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), Some("secret"));
    }

    #[test]
    fn test_api_key_only_has_no_secret() {
        let creds = Credentials::api_key_only("key");
        assert!(!creds.has_secret());
        assert_eq!(creds.expose_secret(), None);
        assert!(format!("{creds:?}").contains("None"));
    }

    #[test]
    fn test_empty_secret_is_no_secret() {
        let creds = Credentials::new("key", "");
        assert!(!creds.has_secret());
        assert_eq!(creds.expose_secret(), None);
    }

    #[test]
    fn test_try_from_env_empty_secret_is_key_only() {
        unsafe {
            std::env::set_var("BINANCE_TEST_EMPTY_SECRET_KEY", "key");
            std::env::set_var("BINANCE_TEST_EMPTY_SECRET_SECRET", "");
        }
        let provider = EnvCredentials::try_from_env_vars(
            "BINANCE_TEST_EMPTY_SECRET_KEY",
            "BINANCE_TEST_EMPTY_SECRET_SECRET",
        )
        .unwrap();

        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert!(!creds.has_secret());
    }

    #[test]
    fn test_try_from_env_missing_key() {
        assert!(
            EnvCredentials::try_from_env_vars(
                "BINANCE_TEST_UNSET_KEY_VAR",
                "BINANCE_TEST_UNSET_SECRET_VAR"
            )
            .is_none()
        );
    }
}
