mod auth;
mod places;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Debug, Parser)]
#[command(name = "bucketlist")]
#[command(about = "Saved places on a map, unlocked by passcode")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List saved places in the order they were added
    List,
    /// Drop a new pin
    Add {
        #[arg(long, allow_negative_numbers = true, value_parser = parse_latitude)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true, value_parser = parse_longitude)]
        longitude: f64,
        /// Name to give the new place instead of the placeholder
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Edit a saved place and show what is nearby
    Edit {
        id: Uuid,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Show encyclopedia pages near a coordinate
    Nearby {
        #[arg(long, allow_negative_numbers = true, value_parser = parse_latitude)]
        latitude: f64,
        #[arg(long, allow_negative_numbers = true, value_parser = parse_longitude)]
        longitude: f64,
    },
}

fn parse_degrees(raw: &str, limit: f64) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|e: std::num::ParseFloatError| e.to_string())?;
    if !value.is_finite() || value.abs() > limit {
        return Err(format!("must be a finite number between -{limit} and {limit}"));
    }
    Ok(value)
}

fn parse_latitude(raw: &str) -> Result<f64, String> {
    parse_degrees(raw, 90.0)
}

fn parse_longitude(raw: &str) -> Result<f64, String> {
    parse_degrees(raw, 180.0)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = bucketlist_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::List) | None => places::run_list(&config).await?,
        Some(Commands::Add {
            latitude,
            longitude,
            name,
            description,
        }) => {
            let coordinate = bucketlist_core::Coordinate::new(latitude, longitude);
            places::run_add(&config, coordinate, name, description).await?;
        }
        Some(Commands::Edit {
            id,
            name,
            description,
        }) => places::run_edit(&config, id, name, description).await?,
        Some(Commands::Nearby {
            latitude,
            longitude,
        }) => {
            let coordinate = bucketlist_core::Coordinate::new(latitude, longitude);
            places::run_nearby(&config, coordinate).await?;
        }
    }

    Ok(())
}
