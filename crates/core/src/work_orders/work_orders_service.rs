use log::debug;
use std::sync::Arc;

use super::work_orders_model::{NewWorkOrder, WorkOrder, WorkOrderStatus};
use super::work_orders_traits::{WorkOrderRepositoryTrait, WorkOrderServiceTrait};
use crate::errors::Result;

/// Service for managing work orders.
pub struct WorkOrderService {
    repository: Arc<dyn WorkOrderRepositoryTrait>,
}

impl WorkOrderService {
    /// Creates a new WorkOrderService backed by the given repository.
    pub fn new(repository: Arc<dyn WorkOrderRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl WorkOrderServiceTrait for WorkOrderService {
    async fn create_work_order(&self, mut new_order: NewWorkOrder) -> Result<WorkOrder> {
        new_order.validate()?;
        new_order.normalize();
        debug!(
            "Creating work order '{}' for asset {}",
            new_order.title, new_order.asset_id
        );
        self.repository.create(new_order).await
    }

    fn get_work_orders(&self, status_filter: &str) -> Result<Vec<WorkOrder>> {
        if status_filter.is_empty() {
            return self.repository.list();
        }
        match status_filter.parse::<WorkOrderStatus>() {
            Ok(status) => self.repository.list_by_status(status),
            Err(_) => {
                // No stored order can carry an unknown status.
                debug!("Unknown work order status filter '{}'", status_filter);
                Ok(Vec::new())
            }
        }
    }
}
