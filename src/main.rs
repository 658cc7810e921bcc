use anyhow::Result;
use clap::Parser;
use sidecourses_generator::app::App;
use sidecourses_generator::models::Config;
use sidecourses_generator::server;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "sidecourses-generator")]
#[command(about = "Serve the Side Courses AI course-generation endpoint")]
struct CliArgs {
    /// Optional bind address override, e.g. 127.0.0.1:8080.
    #[arg(value_name = "ADDR")]
    bind_addr: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sidecourses_generator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting sidecourses-generator");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.api_key.is_none() {
        warn!("AI_GATEWAY_API_KEY is not set; generation requests will fail");
    }

    let addr = args.bind_addr.unwrap_or_else(|| config.bind_addr.clone());
    let app = App::from_config(&config);

    match server::serve(app, &addr).await {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Server error: {}", e);
            std::process::exit(1);
        }
    }
}
