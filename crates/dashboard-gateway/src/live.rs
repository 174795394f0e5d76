//! Live Market Data Gateway
//!
//! `MarketDataGateway` backed by the public chart and indicator endpoints.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;

use dashboard_core::{DashboardError, MarketDataGateway, Result};

use crate::chart::{self, ChartEnvelope};
use crate::indicator::{self, IndicatorRow};

const GDP_INDICATOR: &str = "NY.GDP.MKTP.CD";
const MARKET_CAP_INDICATOR: &str = "CM.MKT.LCAP.CD";

/// Gateway endpoint configuration
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// Quote/chart API base URL
    pub quote_base_url: String,

    /// Macro indicator API base URL
    pub macro_base_url: String,

    /// Exchange suffix appended to bare ticker symbols
    pub symbol_suffix: String,

    /// Benchmark index symbol
    pub benchmark_symbol: String,

    /// Per-call timeout in seconds; there are no retries
    pub timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            quote_base_url: "https://query1.finance.yahoo.com".into(),
            macro_base_url: "https://api.worldbank.org".into(),
            symbol_suffix: ".JK".into(),
            benchmark_symbol: "^JKSE".into(),
            timeout_secs: 15,
        }
    }
}

/// Live HTTP gateway
pub struct LiveMarketData {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl LiveMarketData {
    pub fn new(config: GatewayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { client, config }
    }

    /// Bare tickers get the configured exchange suffix; symbols that
    /// already carry a suffix or an index prefix pass through unchanged.
    fn listed_symbol(&self, symbol: &str) -> String {
        if symbol.contains('.') || symbol.starts_with('^') {
            symbol.to_string()
        } else {
            format!("{symbol}{}", self.config.symbol_suffix)
        }
    }

    async fn fetch_chart_price(&self, listed: &str) -> Result<Decimal> {
        let url = format!(
            "{}/v8/finance/chart/{listed}?range=5d&interval=1d",
            self.config.quote_base_url
        );
        tracing::debug!("fetching chart for {listed}");

        let envelope: ChartEnvelope = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        chart::extract_price(&envelope)
            .and_then(Decimal::from_f64_retain)
            .ok_or_else(|| DashboardError::QuoteUnavailable(listed.to_string()))
    }

    async fn fetch_indicator(&self, country: &str, code: &str) -> Result<Decimal> {
        let url = format!(
            "{}/v2/country/{country}/indicator/{code}?format=json&per_page=100",
            self.config.macro_base_url
        );
        tracing::debug!("fetching indicator {code} for {country}");

        let payload: Vec<serde_json::Value> = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Payload shape is [paging-meta, rows]; rows may be null when the
        // indicator has no data for the country.
        let rows: Vec<IndicatorRow> = match payload.get(1) {
            Some(v) if !v.is_null() => serde_json::from_value(v.clone())?,
            _ => Vec::new(),
        };

        indicator::latest_value(&rows)
            .and_then(Decimal::from_f64_retain)
            .ok_or_else(|| DashboardError::MacroUnavailable(format!("{code} for {country}")))
    }
}

#[async_trait]
impl MarketDataGateway for LiveMarketData {
    async fn latest_price(&self, symbol: &str) -> Result<Decimal> {
        let listed = self.listed_symbol(symbol);
        self.fetch_chart_price(&listed).await
    }

    async fn benchmark_index(&self) -> Result<Decimal> {
        self.fetch_chart_price(&self.config.benchmark_symbol).await
    }

    async fn gdp_usd(&self, country: &str) -> Result<Decimal> {
        self.fetch_indicator(country, GDP_INDICATOR).await
    }

    async fn market_cap_usd(&self, country: &str) -> Result<Decimal> {
        self.fetch_indicator(country, MARKET_CAP_INDICATOR).await
    }

    fn name(&self) -> &str {
        "LiveMarketData"
    }
}
