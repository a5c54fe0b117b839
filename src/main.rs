//! NMS Inventory Seeder - command line entry point

use anyhow::Context;
use clap::Parser;
use nms_seeder::{
    config::SeederConfig,
    device_import::{DeviceImporter, LocationDirectory},
    location_import::LocationImporter,
    nms_client::NmsClient,
    report::{ImportSummary, RowStatus},
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Seed the NMS inventory from flat files
#[derive(Parser, Debug)]
#[command(name = "nms-seeder", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Create locations from a CSV table (columns: name,lat,long,type)
    Locations {
        /// Path to the locations CSV
        file: PathBuf,
    },
    /// Create camera devices from a CSV table plus a location lookup
    Devices {
        /// Path to the cameras CSV
        file: PathBuf,
        /// Path to the pre-fetched location lookup (JSON array of {location, id})
        #[arg(long)]
        lookup: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nms_seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NMS inventory seeder v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = SeederConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        api_url = %config.api_url,
        area = %config.area,
        station_id = ?config.station_id,
        "Configuration loaded"
    );

    let client = NmsClient::new(&config);

    let summary = match cli.command {
        Command::Locations { file } => {
            LocationImporter::new(&client, config.area.clone())
                .run(&file)
                .await?
        }
        Command::Devices { file, lookup } => {
            let directory = LocationDirectory::from_json_file(&lookup)
                .with_context(|| format!("Failed to load location lookup {}", lookup.display()))?;
            tracing::info!(entries = directory.len(), "Location lookup loaded");

            DeviceImporter::new(&client, directory, config.station_id.clone())
                .run(&file)
                .await?
        }
    };

    print_summary(&summary);

    Ok(if summary.success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_summary(summary: &ImportSummary) {
    println!("\n--- Import Summary ---");
    println!("  created: {}", summary.created_count);
    println!("  skipped: {}", summary.skipped_count);
    println!("  failed:  {}", summary.failed_count);

    for outcome in &summary.details {
        if outcome.status == RowStatus::Created {
            continue;
        }
        let label = match outcome.status {
            RowStatus::Skipped => "skipped",
            RowStatus::Failed => "failed",
            RowStatus::Created => unreachable!(),
        };
        println!(
            "  - {} ({}): {}",
            outcome.name,
            label,
            outcome.reason.as_deref().unwrap_or("-")
        );
    }
}
