use clap::Parser;

/// Top-level CLI parser for the `venture` binary.
#[derive(Debug, Parser)]
#[command(
    name = "venture",
    version,
    about = "Venture - AI startup idea generator and market validator"
)]
pub struct Cli {
    /// Listen address (overrides `server.bind` from config)
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}
