//! Revocation repository trait defining the interface for allowlist persistence.

use async_trait::async_trait;

use crate::domain::entities::record::RevocationRecord;
use crate::errors::{DomainError, DomainResult, TokenError};

/// Repository trait for revocation record persistence operations.
///
/// This trait defines the contract the token service requires from a
/// relational store. Each call must be atomic with respect to concurrent
/// callers on the same key; no cross-call transaction is required.
///
/// # Consistency
/// - Keys are unique; a second insert of the same key must fail rather than
///   overwrite, since silently replacing a record could shorten or lengthen
///   another caller's token lifetime
/// - Liveness is a pure timestamp comparison: a record is live iff
///   `expired_at >= now`
#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Insert a new revocation record.
    ///
    /// # Arguments
    /// * `record` - The record to persist
    ///
    /// # Returns
    /// * `Ok(())` - Record inserted
    /// * `Err(DomainError::Token(TokenError::DuplicateKey))` - A record with
    ///   the same key already exists
    /// * `Err(DomainError)` - Store error occurred
    ///
    /// # Example
    /// ```no_run
    /// # use jk_core::repositories::RevocationRepository;
    /// # use jk_core::domain::entities::record::RevocationRecord;
    /// # async fn example(repo: &impl RevocationRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let record = RevocationRecord::new("jwt_labelabc123", Some(1_700_036_000));
    /// repo.insert(record).await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn insert(&self, record: RevocationRecord) -> DomainResult<()>;

    /// Find a record by key, provided it is still live at `now`.
    ///
    /// # Arguments
    /// * `key` - The store key (`key_prefix + jti`)
    /// * `now` - Current time in epoch seconds
    ///
    /// # Returns
    /// * `Ok(Some(RevocationRecord))` - Record exists and `expired_at >= now`
    /// * `Ok(None)` - No record, or the record has expired
    /// * `Err(DomainError)` - Store error occurred
    async fn find_live(&self, key: &str, now: u64) -> DomainResult<Option<RevocationRecord>>;

    /// Delete the record with the given key.
    ///
    /// Deleting an absent key is not an error.
    ///
    /// # Returns
    /// * `Ok(count)` - Number of rows removed (0 or 1)
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_by_key(&self, key: &str) -> DomainResult<u64>;

    /// Delete all records whose expiry has passed.
    ///
    /// # Arguments
    /// * `now` - Current time in epoch seconds; rows with `expired_at < now`
    ///   are removed
    ///
    /// # Returns
    /// * `Ok(count)` - Number of rows removed
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_expired(&self, now: u64) -> DomainResult<u64>;

    /// Check whether a live record exists for the given key.
    async fn is_live(&self, key: &str, now: u64) -> DomainResult<bool> {
        Ok(self.find_live(key, now).await?.is_some())
    }
}

/// Helper for store implementations: the duplicate-key error for a given key.
pub fn duplicate_key(key: &str) -> DomainError {
    DomainError::Token(TokenError::DuplicateKey {
        key: key.to_string(),
    })
}
