//! Layered signing and verification options.
//!
//! Callers rely on overriding a subset of the instance defaults per call, so
//! the "later wins on key collision" precedence is an explicit contract
//! implemented by [`TokenOptions::resolve`], not incidental struct merging.

use chrono::Duration;
use jsonwebtoken::Algorithm;

/// Declarative options applied when signing or verifying a token.
///
/// Every field is optional; unset fields fall through to the instance
/// defaults, and unset defaults leave the corresponding claim or check out
/// entirely.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenOptions {
    /// Signing algorithm; falls back to the service-level algorithm
    pub algorithm: Option<Algorithm>,

    /// Relative lifetime stamped into the `exp` claim at sign time
    pub expires_in: Option<Duration>,

    /// Relative offset stamped into the `nbf` claim at sign time
    pub not_before: Option<Duration>,

    /// `iss` claim at sign time; expected issuer at verify time
    pub issuer: Option<String>,

    /// `aud` claim at sign time; expected audience at verify time
    pub audience: Option<String>,

    /// `sub` claim at sign time; expected subject at verify time
    pub subject: Option<String>,

    /// Clock-skew allowance in seconds applied to `exp`/`nbf` checks
    pub leeway_secs: Option<u64>,
}

impl TokenOptions {
    /// Creates an empty options set
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves per-call overrides against instance defaults, field-wise.
    ///
    /// A field set in `overrides` wins; anything unset falls back to
    /// `defaults`.
    pub fn resolve(defaults: &TokenOptions, overrides: Option<&TokenOptions>) -> TokenOptions {
        let Some(overrides) = overrides else {
            return defaults.clone();
        };

        TokenOptions {
            algorithm: overrides.algorithm.or(defaults.algorithm),
            expires_in: overrides.expires_in.or(defaults.expires_in),
            not_before: overrides.not_before.or(defaults.not_before),
            issuer: overrides
                .issuer
                .clone()
                .or_else(|| defaults.issuer.clone()),
            audience: overrides
                .audience
                .clone()
                .or_else(|| defaults.audience.clone()),
            subject: overrides
                .subject
                .clone()
                .or_else(|| defaults.subject.clone()),
            leeway_secs: overrides.leeway_secs.or(defaults.leeway_secs),
        }
    }

    /// Set the signing algorithm
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the relative token lifetime
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = Some(expires_in);
        self
    }

    /// Set the relative not-before offset
    pub fn with_not_before(mut self, not_before: Duration) -> Self {
        self.not_before = Some(not_before);
        self
    }

    /// Set the issuer
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the audience
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Set the subject
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the clock-skew allowance for verification
    pub fn with_leeway_secs(mut self, leeway_secs: u64) -> Self {
        self.leeway_secs = Some(leeway_secs);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_overrides_clones_defaults() {
        let defaults = TokenOptions::new()
            .with_issuer("issuer")
            .with_expires_in(Duration::hours(10));

        let resolved = TokenOptions::resolve(&defaults, None);

        assert_eq!(resolved, defaults);
    }

    #[test]
    fn test_override_wins_on_collision() {
        let defaults = TokenOptions::new()
            .with_issuer("default-issuer")
            .with_audience("default-audience");
        let overrides = TokenOptions::new().with_issuer("call-issuer");

        let resolved = TokenOptions::resolve(&defaults, Some(&overrides));

        // Overridden field wins; untouched field falls back.
        assert_eq!(resolved.issuer.as_deref(), Some("call-issuer"));
        assert_eq!(resolved.audience.as_deref(), Some("default-audience"));
    }

    #[test]
    fn test_unset_everywhere_stays_unset() {
        let defaults = TokenOptions::new();
        let overrides = TokenOptions::new().with_leeway_secs(0);

        let resolved = TokenOptions::resolve(&defaults, Some(&overrides));

        assert_eq!(resolved.leeway_secs, Some(0));
        assert!(resolved.expires_in.is_none());
        assert!(resolved.subject.is_none());
    }

    #[test]
    fn test_algorithm_override() {
        let defaults = TokenOptions::new().with_algorithm(Algorithm::HS256);
        let overrides = TokenOptions::new().with_algorithm(Algorithm::HS512);

        let resolved = TokenOptions::resolve(&defaults, Some(&overrides));

        assert_eq!(resolved.algorithm, Some(Algorithm::HS512));
    }
}
