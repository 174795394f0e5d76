//! Dashboard Webhook Service
//!
//! Axum-based service around the dashboard engine: one inbound
//! `/dashboard` command produces one report delivered to the configured
//! chat. Credentials and paths are read once here at startup; nothing
//! below the bootstrap touches the environment.

mod config;
mod handlers;
mod loader;
mod state;
mod telegram;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard_core::MarketDataGateway;
use dashboard_gateway::{GatewayConfig, LiveMarketData};

use crate::config::BotConfig;
use crate::handlers::{health_check, home, telegram_webhook};
use crate::state::AppState;
use crate::telegram::TelegramClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = Arc::new(BotConfig::from_env()?);
    let bind_addr = config.bind_addr.clone();

    let gateway: Arc<dyn MarketDataGateway> =
        Arc::new(LiveMarketData::new(GatewayConfig::default()));
    let telegram = Arc::new(TelegramClient::new(&config.bot_token, &config.chat_id));

    tracing::info!("✓ Market data gateway: {}", gateway.name());
    tracing::info!("✓ Portfolio tables: {}", config.portfolio_dir.display());

    let state = AppState {
        config,
        gateway,
        telegram,
    };

    let app = Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .route("/webhook", post(telegram_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("🚀 dashboard-bot running on http://{}", bind_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /        - Liveness text");
    tracing::info!("  GET  /health  - Health check");
    tracing::info!("  POST /webhook - Inbound command ingestion");

    axum::serve(listener, app).await?;

    Ok(())
}
