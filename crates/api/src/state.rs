use std::sync::Arc;

use jamboree_core::event_card::EventSource;
use jamboree_core::profile_page::ProfileSource;

use crate::config::ServerConfig;
use crate::navigation::NavigationHub;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks).
    pub pool: jamboree_db::DbPool,
    /// Server configuration (session verification, gate policy).
    pub config: Arc<ServerConfig>,
    /// Profile and account lookups.
    pub profiles: Arc<dyn ProfileSource>,
    /// Event lookups for event cards.
    pub events: Arc<dyn EventSource>,
    /// Per-viewer navigation intent channels.
    pub navigation: Arc<NavigationHub>,
}

impl AppState {
    /// State backed by Postgres for every lookup.
    pub fn with_pg_backend(pool: jamboree_db::DbPool, config: ServerConfig) -> Self {
        let backend = Arc::new(jamboree_db::PgBackend::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            profiles: backend.clone(),
            events: backend,
            navigation: Arc::new(NavigationHub::new()),
        }
    }
}
