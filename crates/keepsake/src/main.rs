//! keepsake service binary: serves the room access-token endpoint.

use anyhow::Context;
use clap::Parser;
use keepsake_config::KeepsakeConfig;
use keepsake_server::{TokenState, serve};
use log::info;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "keepsake", about = "Token endpoint for the keepsake voice companion")]
struct Args {
    /// Bind address override for the token endpoint.
    #[arg(long)]
    http_addr: Option<String>,

    /// Env file loaded before reading configuration.
    #[arg(long)]
    env_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match &args.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("loading env file {}", path.display()))?;
        }
        None => {
            let _ = dotenvy::dotenv();
        }
    }
    keepsake::init_logging();

    let mut config = KeepsakeConfig::from_env().context("loading configuration")?;
    if let Some(addr) = args.http_addr {
        config.http.bind_addr = addr;
    }

    info!("starting keepsake (bind_addr={})", config.http.bind_addr);
    serve(
        &config.http.bind_addr,
        TokenState {
            api_key: config.livekit.api_key.clone(),
            api_secret: config.livekit.api_secret.clone(),
        },
    )
    .await
    .context("serving token endpoint")?;
    Ok(())
}
