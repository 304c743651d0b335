//! Connection pooling, migrations and initialization for the SQLite store.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, PooledConnection};
use diesel::sqlite::SqliteConnection;
use diesel::Connection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::{error, info};
use maintenance_core::errors::{DatabaseError, Error, Result};

use crate::errors::{StorageError, WithOperation};

pub mod write_actor;
pub use write_actor::{spawn_writer, WriteHandle};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Default location of the database file.
pub const DEFAULT_DB_PATH: &str = "./db/maintenance.db";

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Pool sizing and per-round-trip time bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of pooled connections.
    pub max_connections: u32,
    /// Connections kept open while idle.
    pub min_connections: u32,
    /// Connections older than this are closed and replaced.
    pub max_lifetime: Option<Duration>,
    /// Bound on acquiring a connection, waiting on a locked database, and
    /// awaiting the writer.
    pub operation_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 0,
            max_lifetime: Some(Duration::from_secs(3600)),
            operation_timeout: Duration::from_secs(3),
        }
    }
}

impl PoolConfig {
    /// Rejects settings the pool cannot run with. The writer holds one
    /// connection for its whole lifetime, so at least two are needed for
    /// reads to make progress.
    pub fn validate(&self) -> Result<()> {
        if self.max_connections < 2 {
            return Err(pool_config_error(format!(
                "max connections must be at least 2, got {}",
                self.max_connections
            )));
        }
        if self.min_connections > self.max_connections {
            return Err(pool_config_error(format!(
                "min connections ({}) exceeds max connections ({})",
                self.min_connections, self.max_connections
            )));
        }
        if self.operation_timeout.is_zero() {
            return Err(pool_config_error("operation timeout must be positive".into()));
        }
        if self.max_lifetime.is_some_and(|lifetime| lifetime.is_zero()) {
            return Err(pool_config_error("max lifetime must be positive".into()));
        }
        Ok(())
    }
}

fn pool_config_error(reason: String) -> Error {
    Error::Database(DatabaseError::PoolCreationFailed(reason))
}

/// Applied to every connection the pool hands out.
#[derive(Debug)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> std::result::Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Prepares the database file: creates its directory and switches the
/// journal to WAL. Returns the path in use.
pub fn init(db_path: &str) -> Result<String> {
    if let Some(db_dir) = Path::new(db_path).parent() {
        if !db_dir.as_os_str().is_empty() && !db_dir.exists() {
            fs::create_dir_all(db_dir).map_err(|e| {
                Error::Database(DatabaseError::ConnectionFailed(format!(
                    "create database directory {}: {}",
                    db_dir.display(),
                    e
                )))
            })?;
        }
    }

    let mut conn = SqliteConnection::establish(db_path)
        .map_err(|e| Error::from(StorageError::from(e)))?;
    conn.batch_execute(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous  = NORMAL;
        ",
    )
    .with_operation("configure database")?;

    Ok(db_path.to_string())
}

pub fn create_pool(db_path: &str, config: &PoolConfig) -> Result<Arc<DbPool>> {
    config.validate()?;
    info!(
        "Creating database pool for {} (max {}, min {})",
        db_path, config.max_connections, config.min_connections
    );
    let manager = ConnectionManager::<SqliteConnection>::new(db_path);
    let pool = r2d2::Pool::builder()
        .max_size(config.max_connections)
        .min_idle(Some(config.min_connections))
        .max_lifetime(config.max_lifetime)
        .connection_timeout(config.operation_timeout)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: config.operation_timeout,
        }))
        .build(manager)
        .map_err(|e| Error::Database(DatabaseError::PoolCreationFailed(e.to_string())))?;
    Ok(Arc::new(pool))
}

pub fn get_connection(pool: &DbPool) -> Result<DbConnection> {
    pool.get().with_operation("acquire connection")
}

pub fn run_migrations(pool: &DbPool) -> Result<()> {
    info!("Running database migrations");
    let mut connection = get_connection(pool)?;

    let applied = connection.run_pending_migrations(MIGRATIONS).map_err(|e| {
        error!("Database migration failed: {}", e);
        Error::Database(DatabaseError::MigrationFailed(e.to_string()))
    })?;

    if applied.is_empty() {
        info!("No pending migrations to apply.");
    } else {
        info!("Applied the following migrations:");
        for migration_version in &applied {
            info!("  - {}", migration_version);
        }
    }

    Ok(())
}

/// Opens a connection and runs a trivial query.
pub fn ping(pool: &DbPool) -> Result<()> {
    let mut conn = get_connection(pool)?;
    conn.batch_execute("SELECT 1;").with_operation("db ping")
}
