use anyhow::Context;
use venture_config::VentureConfig;

use crate::cli::Cli;

/// Load `.env` + layered config, then apply command-line overrides.
pub fn load_config(cli: &Cli) -> anyhow::Result<VentureConfig> {
    let mut config = VentureConfig::load_with_dotenv().context("failed to load configuration")?;

    if let Some(bind) = &cli.bind {
        config.server.bind.clone_from(bind);
    }

    if config.openrouter.is_configured() {
        tracing::info!(model = %config.openrouter.model, "OpenRouter credential loaded");
    } else {
        tracing::warn!(
            "OPENROUTER_API_KEY not set; generation and validation are disabled until it is configured"
        );
    }

    Ok(config)
}
