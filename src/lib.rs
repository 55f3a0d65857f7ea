pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod providers;
pub mod relay;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;

use cli::Cli;
use config::Config;
use gateway::AnthropicGateway;
use relay::Relay;

pub async fn run() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let _log_guard = logging::init();

    let params = Cli::parse().into_params();
    let cfg = Config::from_env();
    info!(
        model = %params.model,
        max_tokens = params.max_tokens,
        base_url = %cfg.base_url,
        credential_present = cfg.api_key.is_some(),
        "loaded runtime configuration"
    );

    let client = Client::builder()
        .build()
        .context("Failed to initialize HTTP client")?;
    let relay = Relay::new(&cfg, AnthropicGateway::new(&client, &cfg));

    let mut stdout = io::stdout().lock();
    let status = relay
        .run(&params, &mut stdout)
        .await
        .context("Failed to write to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(status.into())
}
