//! MovieGraph server.
//!
//! Usage:
//!   moviegraph-server [--config FILE] [--bind ADDR] [--fixture FILE]

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use moviegraph_server::AppConfig;

/// Read-only HTTP API over a movie knowledge graph.
#[derive(Parser)]
#[command(name = "moviegraph-server", version, about)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE", env = "MOVIEGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Socket address to listen on (overrides config and MOVIEGRAPH_BIND)
    #[arg(short, long, value_name = "ADDR")]
    bind: Option<String>,

    /// JSON fixture for the memory backend
    #[arg(short, long, value_name = "FILE")]
    fixture: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_process_env();
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }
    if let Some(fixture) = args.fixture {
        config.store.fixture = Some(fixture);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        backend = config.store.backend.as_str(),
        "MovieGraph starting"
    );

    moviegraph_server::run(config).await?;
    Ok(())
}
