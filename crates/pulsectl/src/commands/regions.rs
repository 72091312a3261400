//! Regions command

use crate::client::DaemonClient;
use anyhow::Result;
use console::style;

pub async fn regions(client: &DaemonClient) -> Result<()> {
    let inventory = client.regions().await?;

    if inventory.regions.is_empty() {
        println!("{}", style("No regions in the telemetry snapshot").yellow());
        return Ok(());
    }

    println!("{}", style("Regions").bold());
    for info in inventory.regions {
        println!("  {:<16} {} record(s)", info.region, info.records);
    }

    Ok(())
}
