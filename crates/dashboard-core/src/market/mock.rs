//! Mock Market Data
//!
//! For testing and demo purposes. Returns realistic static figures and can
//! be switched to fail per lookup kind.

use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::MarketDataGateway;
use crate::error::{DashboardError, Result};

/// Mock gateway with a static price table
pub struct MockMarketData {
    prices: HashMap<String, Decimal>,
    benchmark: Option<Decimal>,
    gdp: Option<Decimal>,
    market_cap: Option<Decimal>,
}

impl Default for MockMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMarketData {
    pub fn new() -> Self {
        let prices = [
            ("BBCA", dec!(10400)),
            ("BBRI", dec!(3890)),
            ("TLKM", dec!(2980)),
            ("ASII", dec!(4500)),
            ("UNVR", dec!(1745)),
            ("ICBP", dec!(11250)),
            ("ANTM", dec!(1620)),
        ]
        .into_iter()
        .map(|(code, price)| (code.to_string(), price))
        .collect();

        Self {
            prices,
            benchmark: Some(dec!(7448.12)),
            gdp: Some(dec!(1_390_000_000_000)),
            market_cap: Some(dec!(800_000_000_000)),
        }
    }

    /// Override or add one quoted price.
    #[must_use]
    pub fn with_price(mut self, symbol: &str, price: Decimal) -> Self {
        self.prices.insert(symbol.to_uppercase(), price);
        self
    }

    /// Make one symbol's quote lookup fail.
    #[must_use]
    pub fn without_price(mut self, symbol: &str) -> Self {
        self.prices.remove(&symbol.to_uppercase());
        self
    }

    #[must_use]
    pub fn with_benchmark(mut self, level: Decimal) -> Self {
        self.benchmark = Some(level);
        self
    }

    /// Make the benchmark lookup fail.
    #[must_use]
    pub fn without_benchmark(mut self) -> Self {
        self.benchmark = None;
        self
    }

    #[must_use]
    pub fn with_macro(mut self, gdp: Decimal, market_cap: Decimal) -> Self {
        self.gdp = Some(gdp);
        self.market_cap = Some(market_cap);
        self
    }

    /// Make both macro lookups fail.
    #[must_use]
    pub fn without_macro(mut self) -> Self {
        self.gdp = None;
        self.market_cap = None;
        self
    }
}

#[async_trait]
impl MarketDataGateway for MockMarketData {
    async fn latest_price(&self, symbol: &str) -> Result<Decimal> {
        self.prices
            .get(&symbol.to_uppercase())
            .copied()
            .ok_or_else(|| DashboardError::QuoteUnavailable(symbol.to_string()))
    }

    async fn benchmark_index(&self) -> Result<Decimal> {
        self.benchmark
            .ok_or_else(|| DashboardError::QuoteUnavailable("benchmark index".into()))
    }

    async fn gdp_usd(&self, country: &str) -> Result<Decimal> {
        self.gdp
            .ok_or_else(|| DashboardError::MacroUnavailable(format!("GDP for {country}")))
    }

    async fn market_cap_usd(&self, country: &str) -> Result<Decimal> {
        self.market_cap
            .ok_or_else(|| DashboardError::MacroUnavailable(format!("market cap for {country}")))
    }

    fn name(&self) -> &str {
        "MockMarketData"
    }
}
