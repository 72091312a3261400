//! Region aggregator - turns an aggregation request into per-region summary
//! statistics over the telemetry store.
//!
//! A pure function over an immutable store and a request value; concurrent
//! invocations need no coordination.

use crate::error::PulseError;
use crate::stats;
use crate::store::TelemetryStore;
use crate::types::{
    AggregationRequest, RegionMetrics, RegionReport, RegionSummary, TelemetryRecord,
};

const LATENCY_DECIMALS: u32 = 2;
const UPTIME_DECIMALS: u32 = 4;
const P95: f64 = 0.95;

/// Compute per-region summaries in request order, one entry per occurrence.
///
/// An empty store short-circuits to `PulseError::DataUnavailable` before any
/// per-region work. A region with no records yields an explicit no-data
/// entry; the rest of the request still proceeds.
pub fn aggregate(
    store: &TelemetryStore,
    request: &AggregationRequest,
) -> Result<Vec<RegionSummary>, PulseError> {
    if store.is_empty() {
        return Err(PulseError::DataUnavailable);
    }

    let mut summaries = Vec::with_capacity(request.regions.len());
    for region in &request.regions {
        let rows = store.records_for(region);
        let report = if rows.is_empty() {
            RegionReport::NoData
        } else {
            RegionReport::Metrics(region_metrics(&rows, request.threshold_ms))
        };
        summaries.push(RegionSummary {
            region: region.clone(),
            report,
        });
    }
    Ok(summaries)
}

fn region_metrics(rows: &[&TelemetryRecord], threshold_ms: i64) -> RegionMetrics {
    let latencies: Vec<f64> = rows.iter().map(|r| r.latency_ms).collect();
    let uptimes: Vec<f64> = rows.iter().map(|r| r.uptime_percent).collect();

    let threshold = threshold_ms as f64;
    let breaches = rows.iter().filter(|r| r.latency_ms > threshold).count() as u64;

    RegionMetrics {
        avg_latency: stats::round_dp(stats::mean(&latencies), LATENCY_DECIMALS),
        p95_latency: stats::round_dp(stats::percentile(&latencies, P95), LATENCY_DECIMALS),
        avg_uptime: stats::round_dp(stats::mean(&uptimes), UPTIME_DECIMALS),
        breaches,
    }
}
