//! Pulse Daemon - serves per-region service-health summaries over HTTP.
//!
//! Loads the telemetry snapshot once at startup, then answers aggregation
//! requests from an immutable in-memory store.

use anyhow::Result;
use pulse_common::store::TelemetryStore;
use pulsed::config::PulsedConfig;
use pulsed::server::{self, AppState};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_level(true)
        .init();

    info!(target: "pulsed", "starting {}", env!("CARGO_PKG_VERSION"));

    let config = PulsedConfig::load();

    let store = TelemetryStore::load(&config.data.telemetry_path);
    if store.is_empty() {
        warn!(target: "pulsed", "serving without telemetry data, requests get data-unavailable");
    } else {
        info!(
            target: "pulsed",
            "telemetry snapshot ready: {} record(s), {} region(s)",
            store.len(),
            store.region_count()
        );
    }

    server::run(&config.server.listen_addr, AppState::new(store)).await
}
