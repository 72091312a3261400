//! Aggregate command

use crate::client::DaemonClient;
use anyhow::Result;
use owo_colors::OwoColorize;
use pulse_common::types::{AggregationRequest, RegionReport};

pub async fn aggregate(client: &DaemonClient, regions: Vec<String>, threshold: i64) -> Result<()> {
    let request = AggregationRequest {
        regions,
        threshold_ms: threshold,
    };
    let response = client.aggregate(&request).await?;

    for summary in response.regions {
        match summary.report {
            RegionReport::Metrics(metrics) => {
                println!("{}", summary.region.bold());
                println!("  avg latency:  {:.2} ms", metrics.avg_latency);
                println!("  p95 latency:  {:.2} ms", metrics.p95_latency);
                println!("  avg uptime:   {:.4} %", metrics.avg_uptime);
                if metrics.breaches > 0 {
                    println!("  breaches:     {}", metrics.breaches.red());
                } else {
                    println!("  breaches:     {}", metrics.breaches.green());
                }
            }
            RegionReport::NoData => {
                println!(
                    "{}  {}",
                    summary.region.bold(),
                    "no telemetry for region".yellow()
                );
            }
        }
    }

    Ok(())
}
