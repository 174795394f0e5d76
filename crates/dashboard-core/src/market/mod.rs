//! Market Data Gateway
//!
//! Abstraction over the external quote and macro-indicator sources.
//! Every lookup returns a typed `Result`; "unavailable" is the `Err`
//! variant, never a silently swallowed failure. How a failure degrades is
//! the caller's decision: the engine substitutes the buy price for a single
//! quote, zero for the benchmark, and aborts the run for macro data.

mod mock;

pub use mock::MockMarketData;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::Result;

/// Read-only market data source (Strategy pattern)
///
/// Implement this per provider: the live chart/indicator client, a broker
/// API, or the in-crate mock.
#[async_trait]
pub trait MarketDataGateway: Send + Sync {
    /// Latest traded price for one listed symbol.
    async fn latest_price(&self, symbol: &str) -> Result<Decimal>;

    /// Latest level of the benchmark index.
    async fn benchmark_index(&self) -> Result<Decimal>;

    /// Most recent GDP figure for a country, in USD.
    async fn gdp_usd(&self, country: &str) -> Result<Decimal>;

    /// Aggregate listed market capitalization for a country, in USD.
    async fn market_cap_usd(&self, country: &str) -> Result<Decimal>;

    /// Latest price with a caller-supplied fallback; this lookup is never
    /// fatal to a run.
    async fn latest_price_or(&self, symbol: &str, fallback: Decimal) -> Decimal {
        match self.latest_price(symbol).await {
            Ok(price) => price,
            Err(e) => {
                tracing::warn!("price lookup failed for {symbol}: {e}; using fallback");
                fallback
            }
        }
    }

    /// Gateway name for logging
    fn name(&self) -> &str;
}
