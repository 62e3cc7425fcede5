//! Key material handling for JWT signing and verification.
//!
//! HMAC algorithms treat the configured material as a shared secret; RSA, EC,
//! and EdDSA algorithms expect PEM-encoded keys.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey};

use crate::errors::TokenError;

fn invalid_key(message: String) -> TokenError {
    TokenError::InvalidKey { message }
}

/// Builds the encoding key for the given algorithm from raw key material.
pub fn encoding_key(algorithm: Algorithm, material: &str) -> Result<EncodingKey, TokenError> {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            Ok(EncodingKey::from_secret(material.as_bytes()))
        }
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => EncodingKey::from_rsa_pem(material.as_bytes())
            .map_err(|e| invalid_key(format!("Invalid RSA private key: {}", e))),
        Algorithm::ES256 | Algorithm::ES384 => EncodingKey::from_ec_pem(material.as_bytes())
            .map_err(|e| invalid_key(format!("Invalid EC private key: {}", e))),
        Algorithm::EdDSA => EncodingKey::from_ed_pem(material.as_bytes())
            .map_err(|e| invalid_key(format!("Invalid Ed25519 private key: {}", e))),
    }
}

/// Builds the decoding key for the given algorithm from raw key material.
pub fn decoding_key(algorithm: Algorithm, material: &str) -> Result<DecodingKey, TokenError> {
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {
            Ok(DecodingKey::from_secret(material.as_bytes()))
        }
        Algorithm::RS256
        | Algorithm::RS384
        | Algorithm::RS512
        | Algorithm::PS256
        | Algorithm::PS384
        | Algorithm::PS512 => DecodingKey::from_rsa_pem(material.as_bytes())
            .map_err(|e| invalid_key(format!("Invalid RSA public key: {}", e))),
        Algorithm::ES256 | Algorithm::ES384 => DecodingKey::from_ec_pem(material.as_bytes())
            .map_err(|e| invalid_key(format!("Invalid EC public key: {}", e))),
        Algorithm::EdDSA => DecodingKey::from_ed_pem(material.as_bytes())
            .map_err(|e| invalid_key(format!("Invalid Ed25519 public key: {}", e))),
    }
}
