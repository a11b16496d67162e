//! osctl CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use osctl_client::cli::Cli;
use osctl_client::commands::{self, Context};
use osctl_client::config::Config;
use osctl_client::{logging, ClientManager, Result};

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_options(&cli.global)?;
    let manager = ClientManager::new(&config)?;
    let mut ctx = Context::from_config(&manager, &config);
    commands::run(cli.command, &mut ctx).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.global.debug);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
