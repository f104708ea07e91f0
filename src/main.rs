use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use forecastdash::{DashboardConfig, VERSION, telemetry, web};

/// Weather dashboard backend
#[derive(Parser, Debug)]
#[command(name = "forecastdash")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file (default: config/default.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = DashboardConfig::load_from_path(args.config)?;
    if let Some(port) = args.port {
        config.server.port = port;
    }

    telemetry::init(&config.logging, args.verbose)?;
    info!(
        version = VERSION,
        static_dir = %config.server.static_dir,
        "Starting ForecastDash"
    );

    web::run(config).await
}
