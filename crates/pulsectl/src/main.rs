//! Pulse Control - CLI client for the Pulse daemon.
//!
//! Queries the aggregation API and renders results for the terminal.

mod client;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pulsectl")]
#[command(about = "Pulse - per-region service-health summaries", long_about = None)]
#[command(version)]
struct Cli {
    /// Daemon base URL (overrides $PULSECTL_URL)
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show daemon health and dataset summary
    Status,

    /// List regions present in the telemetry snapshot
    Regions,

    /// Compute per-region summary statistics
    Aggregate {
        /// Regions to aggregate, comma-separated (order preserved)
        #[arg(long, value_delimiter = ',', required = true)]
        regions: Vec<String>,

        /// Latency threshold in milliseconds for breach counting
        #[arg(long)]
        threshold: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = client::DaemonClient::new(cli.url);

    match cli.command {
        Commands::Status => commands::status(&client).await,
        Commands::Regions => commands::regions(&client).await,
        Commands::Aggregate { regions, threshold } => {
            commands::aggregate(&client, regions, threshold).await
        }
    }
}
