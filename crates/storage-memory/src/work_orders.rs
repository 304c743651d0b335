//! In-memory work order repository.

use async_trait::async_trait;
use log::debug;
use maintenance_core::errors::Result;
use maintenance_core::work_orders::{
    NewWorkOrder, WorkOrder, WorkOrderRepositoryTrait, WorkOrderStatus,
};

use crate::store::SharedTable;

/// Work order repository that keeps every order in a lock-guarded map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkOrderRepository {
    table: SharedTable<WorkOrder>,
}

impl InMemoryWorkOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkOrderRepositoryTrait for InMemoryWorkOrderRepository {
    async fn create(&self, new_order: NewWorkOrder) -> Result<WorkOrder> {
        let order = self
            .table
            .write("insert work order")?
            .insert_with(|id, now| WorkOrder {
                id,
                asset_id: new_order.asset_id,
                order_type: new_order.order_type.unwrap_or_default(),
                status: new_order.status.unwrap_or_default(),
                title: new_order.title,
                description: new_order.description.unwrap_or_default(),
                breakdown_at: None,
                closed_at: None,
                downtime_minutes: None,
                cause: String::new(),
                solution: String::new(),
                created_at: now,
                updated_at: now,
            });
        debug!("Stored work order {} in memory", order.id);
        Ok(order)
    }

    fn list(&self) -> Result<Vec<WorkOrder>> {
        Ok(self.table.read("query work_orders")?.select(|_| true))
    }

    fn list_by_status(&self, status: WorkOrderStatus) -> Result<Vec<WorkOrder>> {
        Ok(self
            .table
            .read("query by status")?
            .select(|order| order.status == status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maintenance_core::work_orders::WorkOrderType;

    #[tokio::test]
    async fn test_list_by_status_returns_exact_subset_in_id_order() {
        let repo = InMemoryWorkOrderRepository::new();
        let statuses = [
            WorkOrderStatus::Open,
            WorkOrderStatus::Done,
            WorkOrderStatus::Open,
            WorkOrderStatus::Canceled,
            WorkOrderStatus::Open,
        ];
        for (i, status) in statuses.iter().enumerate() {
            repo.create(NewWorkOrder::new(1, format!("Ordem {}", i)).with_status(*status))
                .await
                .unwrap();
        }

        let open: Vec<i64> = repo
            .list_by_status(WorkOrderStatus::Open)
            .unwrap()
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(open, vec![1, 3, 5]);
        assert!(repo
            .list_by_status(WorkOrderStatus::InProgress)
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_reserved_fields_stay_empty() {
        let repo = InMemoryWorkOrderRepository::new();
        let order = repo
            .create(NewWorkOrder::new(3, "Lubrificar rolamento").with_type(WorkOrderType::Condition))
            .await
            .unwrap();
        assert_eq!(order.breakdown_at, None);
        assert_eq!(order.closed_at, None);
        assert_eq!(order.downtime_minutes, None);
        assert!(order.cause.is_empty());
        assert!(order.solution.is_empty());
        assert_eq!(order.order_type, WorkOrderType::Condition);
    }
}
