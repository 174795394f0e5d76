//! Domain Models
//!
//! Core data types for one dashboard evaluation pass. Uses `rust_decimal`
//! for all monetary values - never use f64 for money!
//!
//! Everything here is constructed fresh per invocation and discarded once
//! the report string is produced; nothing persists across runs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::numeric;
use crate::strategy::{Action, MarketCondition};

/// Trading unit convention on this exchange: one lot is 100 shares.
pub const SHARES_PER_LOT: u32 = 100;

/// One holdings row: a position as entered in the input table.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol (e.g. "BBCA"), unique within a snapshot
    pub code: String,

    /// Lot count (1 lot = 100 shares)
    pub lots: u32,

    /// Acquisition price per share
    pub buy_price: Decimal,
}

impl Holding {
    pub fn new(code: impl Into<String>, lots: u32, buy_price: Decimal) -> Self {
        Self {
            code: code.into().to_uppercase(),
            lots,
            buy_price,
        }
    }

    /// Number of shares represented by the lot count.
    pub fn shares(&self) -> Decimal {
        Decimal::from(self.lots) * Decimal::from(SHARES_PER_LOT)
    }
}

/// The input to one evaluation pass: every holding plus the cash balance.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Holdings in input order
    pub holdings: Vec<Holding>,

    /// Cash balance (last non-missing ledger value)
    pub cash: Decimal,
}

impl PortfolioSnapshot {
    pub fn new(holdings: Vec<Holding>, cash: Decimal) -> Self {
        Self { holdings, cash }
    }
}

/// Tunable parameters from the configuration table.
///
/// The macro overrides are optional: when present they take precedence over
/// the live gateway lookups, when absent the gateway is authoritative.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Maximum healthy weight of a single position, in percent
    pub max_position_weight: Decimal,

    /// Country code for the macro lookups
    pub country: String,

    /// Optional GDP override in USD
    pub gdp_usd: Option<Decimal>,

    /// Optional aggregate market capitalization override in USD
    pub market_cap_usd: Option<Decimal>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            max_position_weight: dec!(20),
            country: "IDN".into(),
            gdp_usd: None,
            market_cap_usd: None,
        }
    }
}

impl DashboardConfig {
    /// Build from the key/value configuration table. Absent or unparsable
    /// values fall back to the defaults; non-positive figures are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            match key.trim() {
                "MAX_POSITION_WEIGHT" => {
                    if let Some(v) = numeric::ID.try_parse(value).filter(|v| *v > Decimal::ZERO) {
                        config.max_position_weight = v;
                    }
                }
                "COUNTRY" => {
                    let v = value.trim();
                    if !v.is_empty() {
                        config.country = v.to_uppercase();
                    }
                }
                "GDP_USD" => {
                    config.gdp_usd =
                        numeric::ID.try_parse(value).filter(|v| *v > Decimal::ZERO);
                }
                "MARKET_CAP_USD" => {
                    config.market_cap_usd =
                        numeric::ID.try_parse(value).filter(|v| *v > Decimal::ZERO);
                }
                _ => {}
            }
        }
        config
    }
}

/// One holding after valuation against its current price.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvaluatedPosition {
    pub code: String,
    pub lots: u32,
    pub buy_price: Decimal,

    /// buy_price × lots × 100
    pub buy_value: Decimal,

    /// Looked-up price, or the buy price when the lookup failed
    pub last_price: Decimal,

    /// last_price × lots × 100
    pub current_value: Decimal,

    /// current_value − buy_value
    pub gain: Decimal,

    /// Gain relative to buy value, zero when the buy value is zero
    pub gain_pct: Decimal,

    /// Share of total current equity value, assigned by the aggregator
    pub weight_pct: Decimal,
}

impl EvaluatedPosition {
    /// Value one holding at its resolved current price. Pure.
    pub fn evaluate(holding: &Holding, last_price: Decimal) -> Self {
        let shares = holding.shares();
        let buy_value = holding.buy_price * shares;
        let current_value = last_price * shares;
        let gain = current_value - buy_value;
        let gain_pct = if buy_value > Decimal::ZERO {
            gain / buy_value * dec!(100)
        } else {
            Decimal::ZERO
        };

        Self {
            code: holding.code.clone(),
            lots: holding.lots,
            buy_price: holding.buy_price,
            buy_value,
            last_price,
            current_value,
            gain,
            gain_pct,
            weight_pct: Decimal::ZERO,
        }
    }
}

/// Aggregate figures for one evaluation pass, ready for rendering.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_buy_value: Decimal,
    pub total_current_value: Decimal,
    pub total_gain: Decimal,
    pub total_gain_pct: Decimal,
    pub cash: Decimal,

    /// total_current_value + cash
    pub total_portfolio_value: Decimal,

    /// Equity share of the total portfolio, in percent
    pub equity_allocation_pct: Decimal,

    /// Market capitalization / GDP × 100
    pub valuation_ratio: Decimal,

    pub market_condition: MarketCondition,
    pub target_allocation_pct: Decimal,
    pub action: Action,

    /// Benchmark index level, zero when the lookup failed
    pub benchmark_index: Decimal,
}
