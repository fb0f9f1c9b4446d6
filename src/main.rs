use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pagebrief::{api, app_state::AppState, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    if config.llm_api_key().is_none() {
        warn!("LLM_API_KEY is not set; generation endpoints will return 503");
    }

    let bind_addr = config.bind_addr().to_string();
    let app = api::router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {bind_addr}"))?;
    info!(addr = %bind_addr, "pagebrief listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
