//! Air quality CLI - query current readings by coordinates, city or station.

use clap::Parser;
use url::Url;

/// Default service address, matching the server's default listen address.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Parser)]
#[command(name = "aq-cli", version, about = "Current air quality lookup")]
struct Cli {
    /// Base URL of the air quality status service
    #[arg(long, env = "AQ_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: Url,

    #[command(subcommand)]
    command: aq_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using service at {}", cli.base_url);
    aq_cmd::run(cli.command, &cli.base_url).await
}
