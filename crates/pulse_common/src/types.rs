//! Wire and domain types shared between pulsed and pulsectl.
//!
//! Telemetry records are loaded once at daemon startup and never mutated;
//! everything derived from them is computed fresh per request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One telemetry observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Deployment zone the observation belongs to
    pub region: String,

    /// Observed request latency in milliseconds
    pub latency_ms: f64,

    /// Observed service uptime, conventionally in [0, 100]
    #[serde(alias = "uptime_pct")]
    pub uptime_percent: f64,
}

impl TelemetryRecord {
    /// Check the record against the data model invariants.
    pub fn validate(&self) -> Result<(), String> {
        if self.region.is_empty() {
            return Err("region must be non-empty".to_string());
        }
        if !self.latency_ms.is_finite() || self.latency_ms < 0.0 {
            return Err(format!("latency_ms must be non-negative, got {}", self.latency_ms));
        }
        if !self.uptime_percent.is_finite() {
            return Err(format!("uptime_percent must be finite, got {}", self.uptime_percent));
        }
        Ok(())
    }
}

/// Aggregation request body.
///
/// `regions` keeps caller order and may contain duplicates or unknown
/// regions; `threshold_ms` may be zero or negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationRequest {
    pub regions: Vec<String>,
    pub threshold_ms: i64,
}

/// Summary statistics for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionMetrics {
    /// Mean latency in milliseconds, rounded to 2 decimals
    pub avg_latency: f64,

    /// 95th-percentile latency (linear rank interpolation), rounded to 2 decimals
    pub p95_latency: f64,

    /// Mean uptime percentage, rounded to 4 decimals
    pub avg_uptime: f64,

    /// Records whose latency strictly exceeds the requested threshold
    pub breaches: u64,
}

/// Per-region outcome: metrics, or an explicit no-data marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionReport {
    Metrics(RegionMetrics),
    NoData,
}

/// One entry of the aggregation response, at its input position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub region: String,
    pub report: RegionReport,
}

/// Response of `POST /v1/telemetry/process`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResponse {
    /// Per-region summaries in request order, one per occurrence
    pub regions: Vec<RegionSummary>,
}

/// Response of `GET /v1/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: u64,
    pub records: usize,
    pub regions: usize,
    pub data_available: bool,
}

/// One region of the snapshot inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionInfo {
    pub region: String,
    pub records: usize,
}

/// Response of `GET /v1/regions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionsResponse {
    pub regions: Vec<RegionInfo>,
}

/// JSON error body for non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
