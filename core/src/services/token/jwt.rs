//! Thin adapter over the `jsonwebtoken` signing primitive.
//!
//! Maps the library's error kinds onto the crate's token error taxonomy so
//! callers can distinguish an expired token, a forged signature, and garbage
//! input without inspecting `jsonwebtoken` internals.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::claims::Claims;
use crate::errors::TokenError;

/// Signs the claims into a compact JWT string.
pub fn sign_claims(
    claims: &Claims,
    algorithm: Algorithm,
    key: &EncodingKey,
) -> Result<String, TokenError> {
    let header = Header::new(algorithm);
    encode(&header, claims, key).map_err(|e| TokenError::SigningFailed {
        message: e.to_string(),
    })
}

/// Verifies signature and registered claims, returning the decoded claims.
pub fn verify_claims(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
) -> Result<Claims, TokenError> {
    decode::<Claims>(token, key, validation)
        .map(|data| data.claims)
        .map_err(map_verification_error)
}

/// Decodes a token without any cryptographic check.
///
/// Returns `None` for unparseable input. Never use the result for a trust
/// decision.
pub fn decode_unverified(token: &str) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .ok()
}

fn map_verification_error(error: jsonwebtoken::errors::Error) -> TokenError {
    match error.kind() {
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        ErrorKind::InvalidIssuer
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidSubject
        | ErrorKind::ImmatureSignature
        | ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidClaims,
        // InvalidToken, Base64, Json, Utf8, and anything new
        _ => TokenError::MalformedToken,
    }
}
