use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use maintenance_core::assets::{Asset, AssetRepositoryTrait, NewAsset};
use maintenance_core::Result;
use std::sync::Arc;

use super::model::{AssetDB, NewAssetDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::WithOperation;
use crate::schema::assets;

pub struct AssetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AssetRepository { pool, writer }
    }
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        let new_asset_db: NewAssetDB = new_asset.into();
        let created = self
            .writer
            .exec("insert asset", move |conn: &mut SqliteConnection| {
                diesel::insert_into(assets::table)
                    .values(&new_asset_db)
                    .returning(AssetDB::as_returning())
                    .get_result::<AssetDB>(conn)
                    .with_operation("insert asset")
            })
            .await?;
        debug!("Inserted asset {}", created.id);
        Asset::try_from(created)
    }

    fn list(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;
        assets::table
            .select(AssetDB::as_select())
            .order(assets::id.asc())
            .load::<AssetDB>(&mut conn)
            .with_operation("query assets")?
            .into_iter()
            .map(Asset::try_from)
            .collect()
    }

    fn get_by_id(&self, asset_id: i64) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;
        let asset_db = assets::table
            .find(asset_id)
            .select(AssetDB::as_select())
            .first::<AssetDB>(&mut conn)
            .with_operation(&format!("find asset {}", asset_id))?;
        Asset::try_from(asset_db)
    }
}
