//! Database models for work orders.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use maintenance_core::errors::{DatabaseError, Error, Result};
use maintenance_core::work_orders::{NewWorkOrder, WorkOrder, WorkOrderStatus, WorkOrderType};

/// Database model for work orders
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::work_orders)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkOrderDB {
    pub id: i64,
    pub asset_id: i64,
    pub order_type: String,
    pub status: String,
    pub title: String,
    pub description: Option<String>,
    pub breakdown_at: Option<NaiveDateTime>,
    pub closed_at: Option<NaiveDateTime>,
    pub downtime_minutes: Option<i64>,
    pub cause: Option<String>,
    pub solution: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Database model for creating a new work order
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::work_orders)]
pub struct NewWorkOrderDB {
    pub asset_id: i64,
    pub order_type: String,
    pub status: String,
    pub title: String,
    pub description: Option<String>,
}

fn corrupt_row(id: i64, err: Error) -> Error {
    Error::Database(DatabaseError::Internal(format!("work order {}: {}", id, err)))
}

impl TryFrom<WorkOrderDB> for WorkOrder {
    type Error = Error;

    fn try_from(db: WorkOrderDB) -> Result<Self> {
        let order_type = db
            .order_type
            .parse::<WorkOrderType>()
            .map_err(|e| corrupt_row(db.id, e))?;
        let status = db
            .status
            .parse::<WorkOrderStatus>()
            .map_err(|e| corrupt_row(db.id, e))?;

        Ok(Self {
            id: db.id,
            asset_id: db.asset_id,
            order_type,
            status,
            title: db.title,
            description: db.description.unwrap_or_default(),
            breakdown_at: db.breakdown_at,
            closed_at: db.closed_at,
            downtime_minutes: db.downtime_minutes,
            cause: db.cause.unwrap_or_default(),
            solution: db.solution.unwrap_or_default(),
            created_at: db.created_at,
            updated_at: db.updated_at,
        })
    }
}

impl From<NewWorkOrder> for NewWorkOrderDB {
    fn from(domain: NewWorkOrder) -> Self {
        Self {
            asset_id: domain.asset_id,
            order_type: domain.order_type.unwrap_or_default().as_str().to_string(),
            status: domain.status.unwrap_or_default().as_str().to_string(),
            title: domain.title,
            description: domain.description,
        }
    }
}
