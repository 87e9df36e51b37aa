use axum::{
    Router,
    routing::{get, put},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::storage::SqliteStore;

pub mod routes;

/// Server state
///
/// The store sits behind a mutex so every storage call is one atomic unit
/// from the handlers' perspective; SQLite itself serializes writes.
pub struct AppState {
    pub store: Mutex<SqliteStore>,
    pub database_path: PathBuf,
}

/// Builds the axum `Router` with all contact routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::handle_root))
        .route(
            "/contacts",
            get(routes::handle_list).post(routes::handle_create),
        )
        .route(
            "/contacts/{id}",
            put(routes::handle_update).delete(routes::handle_delete),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_server(
    port: u16,
    store: SqliteStore,
    database_path: PathBuf,
) -> anyhow::Result<()> {
    let state = Arc::new(AppState {
        store: Mutex::new(store),
        database_path,
    });

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
