//! Mock implementation of RevocationRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::record::RevocationRecord;
use crate::errors::DomainResult;

use super::r#trait::{duplicate_key, RevocationRepository};

/// In-memory revocation repository for testing
pub struct MockRevocationRepository {
    records: Arc<RwLock<HashMap<String, RevocationRecord>>>,
}

impl MockRevocationRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of records currently stored, live or not
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// Snapshot of the record stored under `key`, if any
    pub async fn get(&self, key: &str) -> Option<RevocationRecord> {
        self.records.read().await.get(key).cloned()
    }

    /// Rewrite a record's expiry in place, simulating external mutation of
    /// the store. Returns false when the key is absent.
    pub async fn override_expired_at(&self, key: &str, expired_at: u64) -> bool {
        let mut records = self.records.write().await;
        match records.get_mut(key) {
            Some(record) => {
                record.expired_at = expired_at;
                true
            }
            None => false,
        }
    }
}

impl Default for MockRevocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationRepository for MockRevocationRepository {
    async fn insert(&self, record: RevocationRecord) -> DomainResult<()> {
        let mut records = self.records.write().await;

        if records.contains_key(&record.key) {
            return Err(duplicate_key(&record.key));
        }

        records.insert(record.key.clone(), record);
        Ok(())
    }

    async fn find_live(&self, key: &str, now: u64) -> DomainResult<Option<RevocationRecord>> {
        let records = self.records.read().await;
        Ok(records.get(key).filter(|r| r.is_live(now)).cloned())
    }

    async fn delete_by_key(&self, key: &str) -> DomainResult<u64> {
        let mut records = self.records.write().await;
        Ok(records.remove(key).map(|_| 1).unwrap_or(0))
    }

    async fn delete_expired(&self, now: u64) -> DomainResult<u64> {
        let mut records = self.records.write().await;
        let initial_count = records.len();

        records.retain(|_, record| record.is_live(now));

        Ok((initial_count - records.len()) as u64)
    }
}
