//! Asset repository and service traits.
//!
//! These traits define the contract for asset operations without any
//! storage-specific types, so the in-memory and SQLite backends are
//! interchangeable behind an `Arc<dyn AssetRepositoryTrait>`.

use async_trait::async_trait;

use super::assets_model::{Asset, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset repository operations.
#[async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    /// Stores a new asset, assigning its ID and both timestamps.
    async fn create(&self, new_asset: NewAsset) -> Result<Asset>;

    /// Lists every stored asset, ordered by ID ascending.
    fn list(&self) -> Result<Vec<Asset>>;

    /// Retrieves an asset by its ID.
    ///
    /// Returns `Error::NotFound` when no asset has that ID.
    fn get_by_id(&self, asset_id: i64) -> Result<Asset>;
}

/// Trait defining the contract for Asset service operations.
#[async_trait]
pub trait AssetServiceTrait: Send + Sync {
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset(&self, asset_id: i64) -> Result<Asset>;
}
