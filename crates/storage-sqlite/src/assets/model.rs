//! Database models for assets.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use maintenance_core::assets::{Asset, Criticality, NewAsset};
use maintenance_core::errors::{DatabaseError, Error, Result};

/// Database model for assets
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub criticality: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new asset. The ID and timestamps are
/// assigned by SQLite.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
pub struct NewAssetDB {
    pub name: String,
    pub location: Option<String>,
    pub criticality: String,
}

impl TryFrom<AssetDB> for Asset {
    type Error = Error;

    fn try_from(db: AssetDB) -> Result<Self> {
        let criticality = db.criticality.parse::<Criticality>().map_err(|e| {
            Error::Database(DatabaseError::Internal(format!("asset {}: {}", db.id, e)))
        })?;
        Ok(Self {
            id: db.id,
            name: db.name,
            location: db.location.unwrap_or_default(),
            criticality,
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewAsset> for NewAssetDB {
    fn from(domain: NewAsset) -> Self {
        Self {
            name: domain.name,
            location: domain.location,
            criticality: domain.criticality.unwrap_or_default().as_str().to_string(),
        }
    }
}
