//! Configuration for the token service

use jsonwebtoken::Algorithm;

use super::options::TokenOptions;

/// Default prefix prepended to every `jti` when deriving a store key
pub const DEFAULT_KEY_PREFIX: &str = "jwt_label";

/// Configuration for the token service
///
/// Two services sharing a key prefix and a store observe each other's
/// revocations; distinct deployments must scope themselves with distinct
/// prefixes or table names.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Prefix prepended to every `jti` to form the store key
    pub key_prefix: String,
    /// Shared secret (HMAC) or PEM private key used for signing
    pub secret_or_private_key: String,
    /// Shared secret or PEM public key used for verification; falls back to
    /// the private key, which covers symmetric setups
    pub secret_or_public_key: Option<String>,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Instance-level option defaults, overridable per call
    pub default_options: TokenOptions,
    /// Whether mutating operations opportunistically purge expired records
    pub self_clean: bool,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            secret_or_private_key: "development-secret-please-change-in-production".to_string(),
            secret_or_public_key: None,
            algorithm: Algorithm::HS256,
            default_options: TokenOptions::default(),
            self_clean: true,
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with the given signing key and defaults
    pub fn new(secret_or_private_key: impl Into<String>) -> Self {
        Self {
            secret_or_private_key: secret_or_private_key.into(),
            ..Default::default()
        }
    }

    /// Set the store key prefix
    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    /// Set a distinct verification key (asymmetric setups)
    pub fn with_public_key(mut self, secret_or_public_key: impl Into<String>) -> Self {
        self.secret_or_public_key = Some(secret_or_public_key.into());
        self
    }

    /// Set the signing algorithm
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the instance-level option defaults
    pub fn with_default_options(mut self, default_options: TokenOptions) -> Self {
        self.default_options = default_options;
        self
    }

    /// Enable or disable opportunistic cleanup
    pub fn with_self_clean(mut self, self_clean: bool) -> Self {
        self.self_clean = self_clean;
        self
    }

    /// Verification key material: the public key when configured, else the
    /// private secret
    pub fn verification_material(&self) -> &str {
        self.secret_or_public_key
            .as_deref()
            .unwrap_or(&self.secret_or_private_key)
    }
}
