//! Main token service implementation

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation};
use tracing::{debug, warn};

use crate::domain::entities::claims::Claims;
use crate::domain::entities::record::RevocationRecord;
use crate::errors::{DomainError, DomainResult, TokenError};
use crate::repositories::RevocationRepository;

use super::config::TokenServiceConfig;
use super::id::{generate_id, DEFAULT_JTI_LENGTH};
use super::jwt;
use super::keys;
use super::options::TokenOptions;

/// Service for issuing, verifying, and revoking JWTs backed by an allowlist
/// store.
///
/// Every issued token has exactly one revocation record from the moment
/// `sign` completes until `destroy` or expiry-based cleanup removes it.
/// Signature validity and record liveness are independent axes: a forged or
/// expired token fails verification before the store is ever consulted, while
/// an authentic token with no live record fails with
/// [`TokenError::TokenDestroyed`].
pub struct TokenService<R: RevocationRepository> {
    pub(crate) repository: R,
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl<R: RevocationRepository> TokenService<R> {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `repository` - Revocation store for record persistence
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance, or an error when the configured key
    /// material does not fit the configured algorithm
    pub fn new(repository: R, config: TokenServiceConfig) -> Result<Self, DomainError> {
        let encoding_key = keys::encoding_key(config.algorithm, &config.secret_or_private_key)?;
        let decoding_key = keys::decoding_key(config.algorithm, config.verification_material())?;

        Ok(Self {
            repository,
            config,
            encoding_key,
            decoding_key,
        })
    }

    /// Signs a payload with the instance key and default options.
    ///
    /// See [`TokenService::sign_with`].
    pub async fn sign(&self, payload: Claims) -> DomainResult<String> {
        self.sign_with(payload, None, None).await
    }

    /// Signs a payload into a JWT and records its identifier in the store.
    ///
    /// A `jti` present in the payload is preserved verbatim; otherwise a
    /// random ten-character identifier is generated. Per-call options win
    /// over the instance defaults field-wise, and a per-call key overrides
    /// the configured one.
    ///
    /// Signing failures surface before anything is written. Two signs racing
    /// on the same `jti` resolve at the store's uniqueness constraint; the
    /// loser gets [`TokenError::DuplicateKey`].
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token; its record is in the store
    /// * `Err(DomainError)` - Signing or record insertion failed
    pub async fn sign_with(
        &self,
        payload: Claims,
        secret_or_private_key: Option<&str>,
        options: Option<TokenOptions>,
    ) -> DomainResult<String> {
        let options = TokenOptions::resolve(&self.config.default_options, options.as_ref());
        let algorithm = options.algorithm.unwrap_or(self.config.algorithm);

        let jti = payload
            .jti
            .clone()
            .unwrap_or_else(|| generate_id(DEFAULT_JTI_LENGTH));
        let claims = self.stamp_claims(payload, &jti, &options);

        let override_key;
        let encoding_key = match secret_or_private_key {
            Some(material) => {
                override_key = keys::encoding_key(algorithm, material)?;
                &override_key
            }
            None if algorithm == self.config.algorithm => &self.encoding_key,
            None => {
                override_key =
                    keys::encoding_key(algorithm, &self.config.secret_or_private_key)?;
                &override_key
            }
        };

        let token = jwt::sign_claims(&claims, algorithm, encoding_key)?;

        // Record expiry must equal the exp the encoder actually embedded,
        // so read it back from the fresh token rather than trusting the
        // requested duration.
        let decoded = jwt::decode_unverified(&token).ok_or(TokenError::MalformedToken)?;
        let key = self.record_key(&jti);
        let record = RevocationRecord::new(&key, decoded.exp.map(|exp| exp.max(0) as u64));
        self.repository.insert(record).await?;

        self.cleanup().await;

        Ok(token)
    }

    /// Verifies a token with the instance key and default options.
    ///
    /// See [`TokenService::verify_with`].
    pub async fn verify(&self, token: &str) -> DomainResult<Claims> {
        self.verify_with(token, None, None).await
    }

    /// Verifies a token cryptographically, then cross-checks the allowlist.
    ///
    /// The verification key resolves as: per-call override, else the
    /// configured public key, else the private secret. Cryptographic and
    /// claim failures propagate before any store access. A token without a
    /// `jti` cannot be revoked individually and is rejected with
    /// [`TokenError::MissingJti`].
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Token is authentic and its record is live
    /// * `Err(DomainError::Token(TokenError::TokenDestroyed))` - Token is
    ///   authentic but its record is absent or has expired in the store
    /// * `Err(DomainError)` - Cryptographic or store failure
    pub async fn verify_with(
        &self,
        token: &str,
        secret_or_public_key: Option<&str>,
        options: Option<TokenOptions>,
    ) -> DomainResult<Claims> {
        let options = TokenOptions::resolve(&self.config.default_options, options.as_ref());
        let algorithm = options.algorithm.unwrap_or(self.config.algorithm);
        let validation = build_validation(algorithm, &options);

        let override_key;
        let decoding_key = match secret_or_public_key {
            Some(material) => {
                override_key = keys::decoding_key(algorithm, material)?;
                &override_key
            }
            None if algorithm == self.config.algorithm => &self.decoding_key,
            None => {
                override_key =
                    keys::decoding_key(algorithm, self.config.verification_material())?;
                &override_key
            }
        };

        let claims = jwt::verify_claims(token, decoding_key, &validation)?;

        let jti = claims.jti.as_deref().ok_or(TokenError::MissingJti)?;
        let key = self.record_key(jti);
        if self.repository.find_live(&key, epoch_now()).await?.is_none() {
            return Err(TokenError::TokenDestroyed.into());
        }

        self.cleanup().await;

        Ok(claims)
    }

    /// Decodes a token without verifying anything. Inspection only; never a
    /// trust decision. No store interaction.
    pub fn decode(&self, token: &str) -> Option<Claims> {
        jwt::decode_unverified(token)
    }

    /// Deletes the revocation record for `jti`, invalidating the token for
    /// every future `verify`.
    ///
    /// Destroying an absent identifier is not an error; the operation is
    /// idempotent and reports `true` on completion either way.
    pub async fn destroy(&self, jti: &str) -> DomainResult<bool> {
        let key = self.record_key(jti);
        self.repository.delete_by_key(&key).await?;

        self.cleanup().await;

        Ok(true)
    }

    /// Purges expired records when self-cleaning is enabled.
    ///
    /// Runs inline after mutating operations, never on a timer. Failures are
    /// logged and swallowed: maintenance must not fail the operation that
    /// triggered it. Stale rows left behind are semantically inert; they are
    /// already filtered by the store's liveness check.
    pub async fn cleanup(&self) {
        if !self.config.self_clean {
            return;
        }

        match self.repository.delete_expired(epoch_now()).await {
            Ok(0) => {}
            Ok(removed) => debug!("Purged {} expired revocation records", removed),
            Err(e) => warn!("Failed to purge expired revocation records: {}", e),
        }
    }

    /// Deletes all expired records regardless of the self-clean flag,
    /// returning the number removed.
    pub async fn purge_expired(&self) -> DomainResult<u64> {
        self.repository.delete_expired(epoch_now()).await
    }

    /// Derives the store key for a token identifier
    pub(crate) fn record_key(&self, jti: &str) -> String {
        format!("{}{}", self.config.key_prefix, jti)
    }

    /// Applies resolved options to the payload, producing the claims to sign
    fn stamp_claims(&self, payload: Claims, jti: &str, options: &TokenOptions) -> Claims {
        let now = Utc::now();
        let mut claims = payload;

        claims.jti = Some(jti.to_string());
        claims.iat.get_or_insert(now.timestamp());
        if let Some(expires_in) = options.expires_in {
            claims.exp = Some((now + expires_in).timestamp());
        }
        if let Some(not_before) = options.not_before {
            claims.nbf = Some((now + not_before).timestamp());
        }
        if let Some(issuer) = &options.issuer {
            claims.iss = Some(issuer.clone());
        }
        if let Some(audience) = &options.audience {
            claims.aud = Some(audience.clone());
        }
        if let Some(subject) = &options.subject {
            claims.sub = Some(subject.clone());
        }

        claims
    }
}

/// Builds the `jsonwebtoken` validation for the resolved options.
///
/// Tokens without an `exp` claim are legal; expiry is still enforced whenever
/// the claim is present. Issuer/audience/subject are only checked when the
/// options name an expected value.
fn build_validation(algorithm: Algorithm, options: &TokenOptions) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.set_required_spec_claims::<&str>(&[]);
    validation.validate_nbf = true;

    if let Some(leeway) = options.leeway_secs {
        validation.leeway = leeway;
    }
    if let Some(issuer) = &options.issuer {
        validation.set_issuer(&[issuer]);
    }
    match &options.audience {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }
    if let Some(subject) = &options.subject {
        validation.sub = Some(subject.clone());
    }

    validation
}

/// Current time in epoch seconds, clamped to the store's unsigned domain
fn epoch_now() -> u64 {
    Utc::now().timestamp().max(0) as u64
}
