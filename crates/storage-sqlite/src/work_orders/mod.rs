//! SQLite storage implementation for work orders.

mod model;
mod repository;

pub use model::{NewWorkOrderDB, WorkOrderDB};
pub use repository::WorkOrderRepository;
