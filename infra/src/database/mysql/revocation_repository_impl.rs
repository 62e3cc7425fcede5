//! MySQL implementation of the RevocationRepository trait.
//!
//! This module provides the concrete implementation of revocation record
//! persistence using MySQL with SQLx. One table, primary-keyed on the store
//! key, with the expiry column defaulting to the never-expires sentinel.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use jk_core::domain::entities::record::{RevocationRecord, NEVER_EXPIRES};
use jk_core::errors::{DomainError, DomainResult};
use jk_core::repositories::revocation::{duplicate_key, RevocationRepository};

use crate::config::table_name_from_env;

/// MySQL implementation of RevocationRepository
///
/// The table name is configurable so that independent deployments sharing a
/// database can scope their revocation namespaces apart.
pub struct MySqlRevocationRepository {
    /// Database connection pool
    pool: MySqlPool,
    /// Table holding the revocation records
    table: String,
}

impl MySqlRevocationRepository {
    /// Create a new MySQL revocation repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    /// * `table` - Revocation table name; must be a plain identifier since it
    ///   is interpolated into SQL, not bound
    ///
    /// # Returns
    /// A new repository, or a validation error for a non-identifier table name
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> Result<Self, DomainError> {
        let table = table.into();
        if !is_valid_table_name(&table) {
            return Err(DomainError::Validation {
                message: format!("Invalid table name: {}", table),
            });
        }

        Ok(Self { pool, table })
    }

    /// Create a repository using the table named by `JWT_TABLE_NAME`
    pub fn from_env(pool: MySqlPool) -> Result<Self, DomainError> {
        Self::new(pool, table_name_from_env())
    }

    /// The table this repository reads and writes
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Create the revocation table when it does not exist yet.
    ///
    /// Mirrors the canonical schema: `key` VARCHAR(255) primary key,
    /// `expiredAt` BIGINT UNSIGNED defaulting to the never-expires sentinel.
    pub async fn ensure_schema(&self) -> DomainResult<()> {
        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS `{}` (\
             `key` VARCHAR(255) NOT NULL PRIMARY KEY, \
             `expiredAt` BIGINT UNSIGNED NOT NULL DEFAULT {})",
            self.table, NEVER_EXPIRES
        );

        sqlx::query(&ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to create revocation table: {}", e),
            })?;

        Ok(())
    }

    /// Convert a database row to a RevocationRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<RevocationRecord, DomainError> {
        let key: String = row.try_get("key").map_err(|e| DomainError::Internal {
            message: format!("Failed to get key: {}", e),
        })?;
        let expired_at: u64 = row
            .try_get("expiredAt")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get expiredAt: {}", e),
            })?;

        Ok(RevocationRecord { key, expired_at })
    }
}

#[async_trait]
impl RevocationRepository for MySqlRevocationRepository {
    async fn insert(&self, record: RevocationRecord) -> DomainResult<()> {
        // A record without an expiry leans on the column default so the row
        // and the schema agree on the sentinel.
        let result = if record.never_expires() {
            let query = format!("INSERT INTO `{}` (`key`) VALUES (?)", self.table);
            sqlx::query(&query)
                .bind(&record.key)
                .execute(&self.pool)
                .await
        } else {
            let query = format!(
                "INSERT INTO `{}` (`key`, `expiredAt`) VALUES (?, ?)",
                self.table
            );
            sqlx::query(&query)
                .bind(&record.key)
                .bind(record.expired_at)
                .execute(&self.pool)
                .await
        };

        result.map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => duplicate_key(&record.key),
            _ => DomainError::Internal {
                message: format!("Failed to insert revocation record: {}", e),
            },
        })?;

        Ok(())
    }

    async fn find_live(&self, key: &str, now: u64) -> DomainResult<Option<RevocationRecord>> {
        let query = format!(
            "SELECT `key`, `expiredAt` FROM `{}` WHERE `key` = ? AND `expiredAt` >= ? LIMIT 1",
            self.table
        );

        let result = sqlx::query(&query)
            .bind(key)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find revocation record: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_key(&self, key: &str) -> DomainResult<u64> {
        let query = format!("DELETE FROM `{}` WHERE `key` = ?", self.table);

        let result = sqlx::query(&query)
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete revocation record: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn delete_expired(&self, now: u64) -> DomainResult<u64> {
        let query = format!("DELETE FROM `{}` WHERE `expiredAt` < ?", self.table);

        let result = sqlx::query(&query)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete expired revocation records: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}

/// Table names are interpolated into SQL; restrict them to identifiers.
fn is_valid_table_name(table: &str) -> bool {
    !table.is_empty()
        && table.len() <= 64
        && table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TABLE_NAME;

    #[test]
    fn test_table_name_validation() {
        assert!(is_valid_table_name(DEFAULT_TABLE_NAME));
        assert!(is_valid_table_name("TOKEN_ALLOWLIST"));
        assert!(is_valid_table_name("records_2024"));

        assert!(!is_valid_table_name(""));
        assert!(!is_valid_table_name("records; DROP TABLE users"));
        assert!(!is_valid_table_name("records`"));
        assert!(!is_valid_table_name(&"x".repeat(65)));
    }
}
