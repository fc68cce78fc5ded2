use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use api::{serve, Config};
use nvidia::models::{Models, DEFAULT_BASE_URL};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use util::{env_or, env_var, load_env};

static DEFAULT_PORT: &str = "5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let api_key = env_var("NVIDIA_API_KEY")?;
    let base_url = env_or("NVIDIA_BASE_URL", DEFAULT_BASE_URL);
    let port = env_or("PORT", DEFAULT_PORT)
        .parse::<u16>()
        .context("PORT must be a port number")?;

    let config = Config::load("Config.toml")?;
    let models = Models::new(&base_url, &api_key)
        .context("failed to build nvidia client")?;
    info!(task = "provider", base_url = models.base_url());

    let router = serve(models, config)?;

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;
    info!(task = "listen", address = %address);

    Ok(axum::serve(listener, router).await?)
}
