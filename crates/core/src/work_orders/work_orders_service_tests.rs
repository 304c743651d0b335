//! Unit tests for the work order service.

use super::*;
use crate::errors::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

/// Records every call so tests can assert which repository method was used.
#[derive(Default)]
struct MockWorkOrderRepository {
    orders: Mutex<Vec<WorkOrder>>,
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl WorkOrderRepositoryTrait for MockWorkOrderRepository {
    async fn create(&self, new_order: NewWorkOrder) -> Result<WorkOrder> {
        self.calls.lock().unwrap().push("create".to_string());
        let mut orders = self.orders.lock().unwrap();
        let order = WorkOrder {
            id: orders.len() as i64 + 1,
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
            created_at: fixed_time(),
            updated_at: fixed_time(),
        };
        orders.push(order.clone());
        Ok(order)
    }

    fn list(&self) -> Result<Vec<WorkOrder>> {
        self.calls.lock().unwrap().push("list".to_string());
        Ok(self.orders.lock().unwrap().clone())
    }

    fn list_by_status(&self, status: WorkOrderStatus) -> Result<Vec<WorkOrder>> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("list_by_status:{}", status));
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect())
    }
}

async fn seeded_service() -> (WorkOrderService, Arc<MockWorkOrderRepository>) {
    let repo = Arc::new(MockWorkOrderRepository::default());
    let service = WorkOrderService::new(repo.clone());
    let inputs = [
        NewWorkOrder::new(1, "Trocar rolete").with_description("Barulho no rolo"),
        NewWorkOrder::new(1, "Preventiva mensal")
            .with_type(WorkOrderType::Preventive)
            .with_status(WorkOrderStatus::Open),
        NewWorkOrder::new(1, "Ajuste de correia")
            .with_type(WorkOrderType::Corrective)
            .with_status(WorkOrderStatus::InProgress),
    ];
    for input in inputs {
        service.create_work_order(input).await.unwrap();
    }
    (service, repo)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_create_work_order_applies_defaults() {
    let (service, _) = seeded_service().await;
    let all = service.get_work_orders("").unwrap();
    assert_eq!(all[0].order_type, WorkOrderType::Corrective);
    assert_eq!(all[0].status, WorkOrderStatus::Open);
    assert_eq!(all[0].description, "Barulho no rolo");
}

#[tokio::test]
async fn test_empty_filter_lists_everything() {
    let (service, repo) = seeded_service().await;
    let all = service.get_work_orders("").unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(repo.calls.lock().unwrap().last().unwrap(), "list");
}

#[tokio::test]
async fn test_status_filter_delegates_to_list_by_status() {
    let (service, repo) = seeded_service().await;
    let open = service.get_work_orders("open").unwrap();
    assert_eq!(open.len(), 2);
    assert!(open.iter().all(|o| o.status == WorkOrderStatus::Open));
    assert_eq!(
        repo.calls.lock().unwrap().last().unwrap(),
        "list_by_status:open"
    );

    let in_progress = service.get_work_orders("in_progress").unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].title, "Ajuste de correia");
}

#[tokio::test]
async fn test_unknown_status_filter_yields_empty_list() {
    let (service, repo) = seeded_service().await;
    let calls_before = repo.calls.lock().unwrap().len();

    let result = service.get_work_orders("closed").unwrap();

    assert!(result.is_empty());
    assert_eq!(repo.calls.lock().unwrap().len(), calls_before);
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    let repo = Arc::new(MockWorkOrderRepository::default());
    let service = WorkOrderService::new(repo.clone());
    assert!(service
        .create_work_order(NewWorkOrder::new(1, ""))
        .await
        .is_err());
    assert!(repo.calls.lock().unwrap().is_empty());
}
