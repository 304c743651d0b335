//! SQLite storage implementation for the maintenance backend.
//!
//! This crate provides the Diesel-backed repositories for assets and work
//! orders. All Diesel and SQLite specifics stay in here; callers only see
//! the traits and error types from `maintenance_core`.
//!
//! Reads run on pooled connections. Writes are funnelled through a single
//! writer actor (see [`db::spawn_writer`]) so that SQLite never sees two
//! concurrent write transactions.

pub mod assets;
pub mod db;
pub mod errors;
pub mod schema;
pub mod work_orders;

pub use db::{
    create_pool, get_connection, init, ping, run_migrations, spawn_writer, DbConnection, DbPool,
    PoolConfig, WriteHandle, DEFAULT_DB_PATH,
};
pub use errors::{StorageError, WithOperation};

pub use assets::AssetRepository;
pub use work_orders::WorkOrderRepository;

// Re-export from maintenance_core for convenience
pub use maintenance_core::errors::{DatabaseError, Error, Result};
