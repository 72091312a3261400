//! API routes for pulsed

use crate::server::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use pulse_common::{
    aggregate, AggregateResponse, AggregationRequest, ErrorResponse, HealthResponse, PulseError,
    RegionsResponse,
};
use std::sync::Arc;
use tracing::{error, info, warn};

type AppStateArc = Arc<AppState>;

// ============================================================================
// Telemetry Routes
// ============================================================================

pub fn telemetry_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/telemetry/process", post(process_telemetry))
}

async fn process_telemetry(
    State(state): State<AppStateArc>,
    Json(req): Json<AggregationRequest>,
) -> Result<Json<AggregateResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!(
        "  Aggregating {} region(s), threshold {}ms",
        req.regions.len(),
        req.threshold_ms
    );

    match aggregate(&state.store, &req) {
        Ok(regions) => Ok(Json(AggregateResponse { regions })),
        Err(PulseError::DataUnavailable) => {
            warn!("  Telemetry store is empty, reporting data unavailable");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: "telemetry data not available".to_string(),
                }),
            ))
        }
        Err(e) => {
            error!("  Aggregation failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    let data_available = !state.store.is_empty();

    Json(HealthResponse {
        status: if data_available { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
        uptime_seconds: state.start_time.elapsed().as_secs(),
        records: state.store.len(),
        regions: state.store.region_count(),
        data_available,
    })
}

// ============================================================================
// Region Routes
// ============================================================================

pub fn region_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/regions", get(list_regions))
}

async fn list_regions(State(state): State<AppStateArc>) -> Json<RegionsResponse> {
    Json(RegionsResponse {
        regions: state.store.regions(),
    })
}
