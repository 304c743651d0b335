//! In-memory asset repository.

use async_trait::async_trait;
use log::debug;
use maintenance_core::assets::{Asset, AssetRepositoryTrait, NewAsset};
use maintenance_core::errors::{Error, Result};

use crate::store::SharedTable;

/// Asset repository that keeps every asset in a lock-guarded map.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetRepository {
    table: SharedTable<Asset>,
}

impl InMemoryAssetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored assets.
    pub fn len(&self) -> Result<usize> {
        Ok(self.table.read("count assets")?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl AssetRepositoryTrait for InMemoryAssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        let asset = self
            .table
            .write("insert asset")?
            .insert_with(|id, now| Asset {
                id,
                name: new_asset.name,
                location: new_asset.location.unwrap_or_default(),
                criticality: new_asset.criticality.unwrap_or_default(),
                created_at: now,
                updated_at: now,
            });
        debug!("Stored asset {} in memory", asset.id);
        Ok(asset)
    }

    fn list(&self) -> Result<Vec<Asset>> {
        Ok(self.table.read("query assets")?.select(|_| true))
    }

    fn get_by_id(&self, asset_id: i64) -> Result<Asset> {
        self.table
            .read("find asset")?
            .get(asset_id)
            .ok_or_else(|| Error::NotFound(format!("find asset {}", asset_id)))
    }
}
