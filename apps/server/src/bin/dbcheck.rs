//! Opens the configured SQLite database, runs a trivial query and exits.
//! A non-zero exit status means the database is unreachable.

use maintenance_server::{config::Config, init_tracing};
use maintenance_storage_sqlite as db;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    let pool = db::create_pool(&config.db_path, &config.pool)?;
    if let Err(e) = db::ping(&pool) {
        tracing::error!("Database check failed for {}: {}", config.db_path, e);
        return Err(e.into());
    }

    tracing::info!("Database connection OK ({})", config.db_path);
    Ok(())
}
