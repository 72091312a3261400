//! Status command

use crate::client::DaemonClient;
use anyhow::Result;
use console::style;

pub async fn status(client: &DaemonClient) -> Result<()> {
    let health = client.health().await?;

    println!("{}", style("Pulse daemon").bold());
    if health.data_available {
        println!("  Status:   {}", style(&health.status).green());
    } else {
        println!("  Status:   {}", style(&health.status).yellow());
    }
    println!("  Version:  {}", health.version);
    println!("  Started:  {}", health.started_at.to_rfc3339());
    println!("  Uptime:   {}s", health.uptime_seconds);
    println!("  Records:  {}", health.records);
    println!("  Regions:  {}", health.regions);

    Ok(())
}
