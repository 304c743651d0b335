//! Unit tests for the asset service.

use super::*;
use crate::errors::{DatabaseError, Error, ErrorKind, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

#[derive(Default)]
struct MockAssetRepository {
    received: Mutex<Vec<NewAsset>>,
    fail_with: Option<&'static str>,
}

impl MockAssetRepository {
    fn failing(message: &'static str) -> Self {
        Self {
            fail_with: Some(message),
            ..Default::default()
        }
    }
}

#[async_trait]
impl AssetRepositoryTrait for MockAssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        if let Some(message) = self.fail_with {
            return Err(Error::Database(DatabaseError::QueryFailed(
                message.to_string(),
            )));
        }
        let mut received = self.received.lock().unwrap();
        received.push(new_asset.clone());
        Ok(Asset {
            id: received.len() as i64,
            name: new_asset.name,
            location: new_asset.location.unwrap_or_default(),
            criticality: new_asset.criticality.unwrap_or_default(),
            created_at: fixed_time(),
            updated_at: fixed_time(),
        })
    }

    fn list(&self) -> Result<Vec<Asset>> {
        unimplemented!()
    }

    fn get_by_id(&self, asset_id: i64) -> Result<Asset> {
        Err(Error::NotFound(format!("asset {}", asset_id)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_create_asset_normalizes_before_delegating() {
    let repo = Arc::new(MockAssetRepository::default());
    let service = AssetService::new(repo.clone());

    let created = service
        .create_asset(NewAsset::new("Rebobinadeira").with_location("Galpao B"))
        .await
        .unwrap();

    assert_eq!(created.criticality, Criticality::B);
    let received = repo.received.lock().unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].criticality, Some(Criticality::B));
}

#[tokio::test]
async fn test_create_asset_keeps_explicit_criticality() {
    let repo = Arc::new(MockAssetRepository::default());
    let service = AssetService::new(repo.clone());

    let created = service
        .create_asset(NewAsset::new("Cortadeira").with_criticality(Criticality::A))
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.criticality, Criticality::A);
}

#[tokio::test]
async fn test_create_asset_rejects_empty_name_without_touching_repository() {
    let repo = Arc::new(MockAssetRepository::default());
    let service = AssetService::new(repo.clone());

    let err = service.create_asset(NewAsset::new("")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(repo.received.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_asset_propagates_repository_error_unchanged() {
    let service = AssetService::new(Arc::new(MockAssetRepository::failing(
        "insert asset: database is locked",
    )));

    let err = service
        .create_asset(NewAsset::new("Prensa"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(err.to_string().contains("insert asset: database is locked"));
}

#[test]
fn test_get_asset_surfaces_not_found() {
    let service = AssetService::new(Arc::new(MockAssetRepository::default()));
    let err = service.get_asset(42).unwrap_err();
    assert!(err.is_not_found());
}
