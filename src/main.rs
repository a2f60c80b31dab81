use api_stress::commands::stress;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reads BASE_URL and ENDPOINT_1..n from the environment (or .env), runs every
/// scenario in order and appends results to RESULTS_FILE.
#[derive(Parser)]
#[command(name = "api-stress")]
#[command(version)]
#[command(about = "Concurrent HTTP stress testing for API endpoints")]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_stress=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    stress::handle_stress().await
}
