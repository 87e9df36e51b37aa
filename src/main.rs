//! Rolodex server - process bootstrap

use rolodex::config;
use rolodex::server;
use rolodex::storage::SqliteStore;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let database_path = config::default_database_path();
    config::ensure_db_dir(&database_path)?;

    let store = SqliteStore::open(&database_path)?;
    let seeded = store.seed_if_empty()?;
    if seeded > 0 {
        tracing::info!("Seeded {} sample contacts into {:?}", seeded, database_path);
    }

    let port = config::port_from_env();
    server::start_server(port, store, database_path).await
}
