use anyhow::Context;
use clap::Parser;
use venture_config::DotenvStatus;
use venture_gateway::Gateway;

mod bootstrap;
mod cli;
mod render;
mod server;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("venture error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    let gateway = Gateway::from_config(&config).context("failed to build HTTP client")?;

    let dotenv = DotenvStatus::detect();
    if !gateway.is_configured() {
        tracing::debug!(found = dotenv.found, has_api_key = dotenv.has_api_key, ".env diagnostics");
    }

    server::serve(&config.server.bind, server::App::new(gateway, dotenv)).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VENTURE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
