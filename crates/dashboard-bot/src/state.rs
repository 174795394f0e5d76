//! Application State

use std::sync::Arc;

use dashboard_core::MarketDataGateway;

use crate::config::BotConfig;
use crate::telegram::TelegramClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Startup configuration
    pub config: Arc<BotConfig>,

    /// Market data source for the engine
    pub gateway: Arc<dyn MarketDataGateway>,

    /// Report delivery client
    pub telegram: Arc<TelegramClient>,
}
