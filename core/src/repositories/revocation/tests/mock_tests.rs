//! Unit tests for the mock revocation repository

use crate::domain::entities::record::{RevocationRecord, NEVER_EXPIRES};
use crate::errors::{DomainError, TokenError};
use crate::repositories::revocation::{MockRevocationRepository, RevocationRepository};

#[tokio::test]
async fn test_insert_and_find_live() {
    let repo = MockRevocationRepository::new();
    let record = RevocationRecord::new("jwt_labelabc", Some(2_000));

    repo.insert(record.clone()).await.unwrap();

    let found = repo.find_live("jwt_labelabc", 1_000).await.unwrap();
    assert_eq!(found, Some(record));
}

#[tokio::test]
async fn test_insert_duplicate_key_is_rejected() {
    let repo = MockRevocationRepository::new();
    let record = RevocationRecord::new("jwt_labelabc", None);

    repo.insert(record.clone()).await.unwrap();
    let err = repo.insert(record).await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::Token(TokenError::DuplicateKey { ref key }) if key == "jwt_labelabc"
    ));
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_find_live_expiry_boundary() {
    let repo = MockRevocationRepository::new();
    let now = 1_700_000_000;
    repo.insert(RevocationRecord::new("at-now", Some(now)))
        .await
        .unwrap();
    repo.insert(RevocationRecord::new("just-past", Some(now - 1)))
        .await
        .unwrap();

    // expired_at == now is live; one second earlier is filtered out even
    // though the row still exists.
    assert!(repo.find_live("at-now", now).await.unwrap().is_some());
    assert!(repo.find_live("just-past", now).await.unwrap().is_none());
    assert_eq!(repo.count().await, 2);
}

#[tokio::test]
async fn test_delete_by_key_is_idempotent() {
    let repo = MockRevocationRepository::new();
    repo.insert(RevocationRecord::new("k", None)).await.unwrap();

    assert_eq!(repo.delete_by_key("k").await.unwrap(), 1);
    assert_eq!(repo.delete_by_key("k").await.unwrap(), 0);
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn test_delete_expired_spares_never_expiring_records() {
    let repo = MockRevocationRepository::new();
    let now = 1_700_000_000;
    repo.insert(RevocationRecord::new("stale", Some(now - 10)))
        .await
        .unwrap();
    repo.insert(RevocationRecord::new("live", Some(now + 10)))
        .await
        .unwrap();
    repo.insert(RevocationRecord::new("forever", None))
        .await
        .unwrap();

    let removed = repo.delete_expired(now).await.unwrap();

    assert_eq!(removed, 1);
    assert!(repo.get("stale").await.is_none());
    assert!(repo.get("live").await.is_some());
    assert_eq!(repo.get("forever").await.unwrap().expired_at, NEVER_EXPIRES);
}

#[tokio::test]
async fn test_is_live_default_method() {
    let repo = MockRevocationRepository::new();
    repo.insert(RevocationRecord::new("k", Some(500)))
        .await
        .unwrap();

    assert!(repo.is_live("k", 400).await.unwrap());
    assert!(!repo.is_live("k", 600).await.unwrap());
    assert!(!repo.is_live("missing", 400).await.unwrap());
}
