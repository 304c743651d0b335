use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use maintenance_core::work_orders::{
    NewWorkOrder, WorkOrder, WorkOrderRepositoryTrait, WorkOrderStatus,
};
use maintenance_core::Result;
use std::sync::Arc;

use super::model::{NewWorkOrderDB, WorkOrderDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::WithOperation;
use crate::schema::work_orders;

pub struct WorkOrderRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl WorkOrderRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        WorkOrderRepository { pool, writer }
    }
}

fn to_domain(rows: Vec<WorkOrderDB>) -> Result<Vec<WorkOrder>> {
    rows.into_iter().map(WorkOrder::try_from).collect()
}

#[async_trait]
impl WorkOrderRepositoryTrait for WorkOrderRepository {
    async fn create(&self, new_order: NewWorkOrder) -> Result<WorkOrder> {
        let new_order_db: NewWorkOrderDB = new_order.into();
        let created = self
            .writer
            .exec("insert work order", move |conn: &mut SqliteConnection| {
                diesel::insert_into(work_orders::table)
                    .values(&new_order_db)
                    .returning(WorkOrderDB::as_returning())
                    .get_result::<WorkOrderDB>(conn)
                    .with_operation("insert work order")
            })
            .await?;
        debug!(
            "Inserted work order {} for asset {}",
            created.id, created.asset_id
        );
        WorkOrder::try_from(created)
    }

    fn list(&self) -> Result<Vec<WorkOrder>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = work_orders::table
            .select(WorkOrderDB::as_select())
            .order(work_orders::id.asc())
            .load::<WorkOrderDB>(&mut conn)
            .with_operation("query work_orders")?;
        to_domain(rows)
    }

    fn list_by_status(&self, status: WorkOrderStatus) -> Result<Vec<WorkOrder>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = work_orders::table
            .filter(work_orders::status.eq(status.as_str()))
            .select(WorkOrderDB::as_select())
            .order(work_orders::id.asc())
            .load::<WorkOrderDB>(&mut conn)
            .with_operation("query by status")?;
        to_domain(rows)
    }
}
