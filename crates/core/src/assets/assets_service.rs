use log::debug;
use std::sync::Arc;

use super::assets_model::{Asset, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::Result;

/// Service for managing assets.
pub struct AssetService {
    repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    /// Creates a new AssetService backed by the given repository.
    pub fn new(repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    /// Validates and normalizes the asset, then hands it to the repository.
    async fn create_asset(&self, mut new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;
        new_asset.normalize();
        debug!(
            "Creating asset '{}' with criticality {:?}",
            new_asset.name, new_asset.criticality
        );
        self.repository.create(new_asset).await
    }

    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.repository.list()
    }

    fn get_asset(&self, asset_id: i64) -> Result<Asset> {
        self.repository.get_by_id(asset_id)
    }
}
