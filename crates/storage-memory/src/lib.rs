//! In-memory storage implementation for the maintenance backend.
//!
//! Each repository owns a map from ID to entity behind one `RwLock`.
//! Creation takes the write lock for exactly the ID/timestamp assignment and
//! the insert; listing takes the read lock and returns copies sorted by ID.
//! Nothing is shared between repository instances, so each test or server
//! constructs its own store.

pub mod assets;
pub mod work_orders;

mod store;

pub use assets::InMemoryAssetRepository;
pub use work_orders::InMemoryWorkOrderRepository;
