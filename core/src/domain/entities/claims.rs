//! Claims entity for JWT payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claims structure for a JWT payload.
///
/// All registered claims are optional; whatever the caller does not set stays
/// out of the encoded token entirely. Custom fields ride along in `extra` and
/// survive an encode/decode round trip verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Claims {
    /// Subject
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Audience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,

    /// Expiration timestamp (epoch seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Not before timestamp (epoch seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Issued at timestamp (epoch seconds)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// JWT ID (unique identifier for the token)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Custom claims carried alongside the registered ones
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Creates an empty claims set with only the subject populated
    pub fn new(sub: impl Into<String>) -> Self {
        Self {
            sub: Some(sub.into()),
            ..Default::default()
        }
    }

    /// Sets a custom claim, replacing any previous value under the same name
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Sets the token identifier
    pub fn with_jti(mut self, jti: impl Into<String>) -> Self {
        self.jti = Some(jti.into());
        self
    }

    /// Reads a custom claim by name
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}
