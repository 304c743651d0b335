//! Work orders module - domain models, services, and traits.

mod work_orders_model;
mod work_orders_service;
mod work_orders_traits;

#[cfg(test)]
mod work_orders_model_tests;
#[cfg(test)]
mod work_orders_service_tests;

pub use work_orders_model::{NewWorkOrder, WorkOrder, WorkOrderStatus, WorkOrderType};
pub use work_orders_service::WorkOrderService;
pub use work_orders_traits::{WorkOrderRepositoryTrait, WorkOrderServiceTrait};
