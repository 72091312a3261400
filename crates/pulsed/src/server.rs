//! HTTP server for pulsed

use crate::routes;
use anyhow::Result;
use axum::http::Method;
use axum::Router;
use chrono::{DateTime, Utc};
use pulse_common::store::TelemetryStore;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
///
/// The store is loaded before the listener starts and is read-only for the
/// process lifetime, so handlers share it through a plain `Arc`.
pub struct AppState {
    pub store: Arc<TelemetryStore>,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: TelemetryStore) -> Self {
        Self {
            store: Arc::new(store),
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }
}

/// Assemble the application router with tracing and CORS layers.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::telemetry_routes())
        .merge(routes::health_routes())
        .merge(routes::region_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

// Browser dashboards call the aggregation endpoint cross-origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Run the HTTP server
pub async fn run(listen_addr: &str, state: AppState) -> Result<()> {
    let state = Arc::new(state);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(listen_addr).await?;
    info!("  Listening on http://{}", listen_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
