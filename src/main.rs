use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;

use cli::Args;
use config::AppConfig;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::resolve(&args)?;

    // RUST_LOG wins over --log-level and the config file
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let model = config.load_model()?;
    cli::run(&args.command, &model)
}
