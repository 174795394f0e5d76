//! # dashboard-gateway
//!
//! Live [`MarketDataGateway`] implementation for the investment dashboard.
//!
//! Two HTTP sources back the four lookups:
//!
//! - a quote **chart** endpoint for per-symbol prices and the benchmark
//!   index level
//! - a country **indicator** endpoint for GDP and aggregate market
//!   capitalization
//!
//! Every call carries the client timeout and is attempted exactly once;
//! degrading a failed lookup is the engine's decision, not this crate's.
//!
//! ```rust,ignore
//! use dashboard_gateway::{GatewayConfig, LiveMarketData};
//!
//! let gateway = LiveMarketData::new(GatewayConfig::default());
//! let price = gateway.latest_price("BBCA").await?;
//! ```

mod chart;
mod indicator;
mod live;

pub use live::{GatewayConfig, LiveMarketData};

// Re-export the trait so binaries only need this crate for wiring
pub use dashboard_core::MarketDataGateway;
