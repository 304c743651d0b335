//! Work order repository and service traits.

use async_trait::async_trait;

use super::work_orders_model::{NewWorkOrder, WorkOrder, WorkOrderStatus};
use crate::errors::Result;

/// Trait defining the contract for WorkOrder repository operations.
#[async_trait]
pub trait WorkOrderRepositoryTrait: Send + Sync {
    /// Stores a new work order, assigning its ID and both timestamps.
    async fn create(&self, new_order: NewWorkOrder) -> Result<WorkOrder>;

    /// Lists every stored work order, ordered by ID ascending.
    fn list(&self) -> Result<Vec<WorkOrder>>;

    /// Lists the work orders whose status equals `status`, ordered by ID ascending.
    fn list_by_status(&self, status: WorkOrderStatus) -> Result<Vec<WorkOrder>>;
}

/// Trait defining the contract for WorkOrder service operations.
#[async_trait]
pub trait WorkOrderServiceTrait: Send + Sync {
    async fn create_work_order(&self, new_order: NewWorkOrder) -> Result<WorkOrder>;

    /// Lists work orders. An empty `status_filter` returns all of them; any
    /// other value returns the exact matches, which is nothing for a value
    /// that is not a known status.
    fn get_work_orders(&self, status_filter: &str) -> Result<Vec<WorkOrder>>;
}
