use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod inference;
mod prompts;

use api::AppState;
use config::AppConfig;
use inference::AnthropicService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // -----------------------------
    // Upstream client (built once, shared by every request)
    // -----------------------------
    let anthropic = AnthropicService::new(&config.anthropic_api_key, &config.anthropic_base_url);

    info!(
        profile = %config.profile,
        model = anthropic.model(),
        max_tokens = config.profile.max_tokens(),
        "sermon prep relay configured"
    );

    let state = AppState::new(Arc::new(anthropic), config.profile);

    // -----------------------------
    // Routers
    // -----------------------------
    let app = Router::new()
        .merge(api::router())
        // CORS for the browser front-end
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);

    info!("Sermon Prep API listening on http://{addr}");
    info!("Generate at http://{addr}/api/generate-sermon-prep");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
