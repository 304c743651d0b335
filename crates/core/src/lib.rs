//! Maintenance Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for tracking assets and the work
//! orders raised against them. It is storage-agnostic and defines the
//! repository traits implemented by `maintenance-storage-memory` and
//! `maintenance-storage-sqlite`.

pub mod assets;
pub mod errors;
pub mod work_orders;

// Re-export common types
pub use assets::*;
pub use work_orders::*;

// Re-export error types
pub use errors::Error;
pub use errors::ErrorKind;
pub use errors::Result;
