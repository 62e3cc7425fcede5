//! Token-specific error types.
//!
//! Cryptographic failures (`SigningFailed`, `InvalidSignature`,
//! `TokenExpired`, `MalformedToken`, `InvalidClaims`) are surfaced before any
//! store access. `TokenDestroyed` is the revocation-side failure: the token is
//! cryptographically authentic but its allowlist record is gone or has aged
//! out. The two axes are reported with distinct variants on purpose.

use thiserror::Error;

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token signing failed: {message}")]
    SigningFailed { message: String },

    #[error("Invalid key material: {message}")]
    InvalidKey { message: String },

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token invalid: jti is missing")]
    MissingJti,

    #[error("Token destroyed")]
    TokenDestroyed,

    #[error("Duplicate revocation key: {key}")]
    DuplicateKey { key: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;

    #[test]
    fn test_destroyed_and_invalid_are_distinct() {
        let destroyed = TokenError::TokenDestroyed;
        let invalid = TokenError::InvalidSignature;
        assert_ne!(destroyed.to_string(), invalid.to_string());
    }

    #[test]
    fn test_token_error_bridges_into_domain_error() {
        let err: DomainError = TokenError::MissingJti.into();
        assert!(matches!(err, DomainError::Token(TokenError::MissingJti)));
        assert_eq!(err.to_string(), "Token invalid: jti is missing");
    }

    #[test]
    fn test_duplicate_key_reports_offending_key() {
        let err = TokenError::DuplicateKey {
            key: "jwt_labeljti99".to_string(),
        };
        assert!(err.to_string().contains("jwt_labeljti99"));
    }
}
