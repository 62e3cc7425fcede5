//! Revocation record entity - the allowlist row backing token liveness.

use serde::{Deserialize, Serialize};

/// Sentinel expiry for tokens that never expire.
///
/// Matches the store column default (BIGINT UNSIGNED maximum), so a record
/// inserted without an expiry and one read back from the column default
/// compare equal.
pub const NEVER_EXPIRES: u64 = u64::MAX;

/// A single allowlist row: store key mapped to an expiration timestamp.
///
/// Records are immutable once inserted; the only lifecycle transitions are
/// insert (sign), delete by key (destroy), and bulk delete (cleanup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationRecord {
    /// Store key, derived as `key_prefix + jti`
    pub key: String,

    /// Expiration timestamp in epoch seconds; `NEVER_EXPIRES` when the token
    /// carries no `exp` claim
    pub expired_at: u64,
}

impl RevocationRecord {
    /// Creates a record for the given store key.
    ///
    /// `expired_at` must equal the token's own `exp` claim when present;
    /// `None` maps to the never-expires sentinel.
    pub fn new(key: impl Into<String>, expired_at: Option<u64>) -> Self {
        Self {
            key: key.into(),
            expired_at: expired_at.unwrap_or(NEVER_EXPIRES),
        }
    }

    /// Checks liveness against the given timestamp.
    ///
    /// A record expiring exactly at `now` is still live.
    pub fn is_live(&self, now: u64) -> bool {
        self.expired_at >= now
    }

    /// Whether this record never expires
    pub fn never_expires(&self) -> bool {
        self.expired_at == NEVER_EXPIRES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_expiry_uses_sentinel() {
        let record = RevocationRecord::new("jwt_labelabc", None);

        assert_eq!(record.expired_at, NEVER_EXPIRES);
        assert!(record.never_expires());
        assert!(record.is_live(u64::MAX));
    }

    #[test]
    fn test_record_with_expiry_keeps_it_verbatim() {
        let record = RevocationRecord::new("jwt_labelabc", Some(1_700_000_000));

        assert_eq!(record.expired_at, 1_700_000_000);
        assert!(!record.never_expires());
    }

    #[test]
    fn test_liveness_boundary() {
        let now = 1_700_000_000;
        let record = RevocationRecord::new("k", Some(now));

        // Expiring exactly now is still live; one second earlier is not.
        assert!(record.is_live(now));
        assert!(!RevocationRecord::new("k", Some(now - 1)).is_live(now));
    }
}
