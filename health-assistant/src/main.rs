//! healthbot: chat with the HealthCare360 assistant or ask a single question. Config from env.

use anyhow::Result;
use assistant_core::init_tracing;
use clap::Parser;
use health_assistant::{run_ask, run_chat, AssistantConfig, Cli};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AssistantConfig::load()?;
    config.validate()?;
    init_tracing(config.log_file(), config.log_to_console())?;
    info!(command = ?cli.command, "healthbot starting");

    match cli.command.question() {
        Some(question) => run_ask(&config, &question).await,
        None => run_chat(&config).await,
    }
}
