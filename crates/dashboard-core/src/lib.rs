//! # dashboard-core
//!
//! Portfolio valuation and recommendation engine: the component behind the
//! `/dashboard` command. One invocation ingests a portfolio snapshot
//! (holdings + cash) and a parameter set, fetches current prices through a
//! [`market::MarketDataGateway`], and renders a fixed-width status report.
//!
//! ## Pipeline
//!
//! ```text
//!  snapshot ──▶ evaluate positions ──▶ aggregate ──┐
//!                    ▲                             ├──▶ render report
//!  gateway ──▶ prices / benchmark / macro ──▶ classify + recommend
//! ```
//!
//! ## Example report
//!
//! ```text
//! ════════════════════════════════════════════════════════════
//!                    INVESTMENT DASHBOARD
//! ════════════════════════════════════════════════════════════
//!
//! Generated          : 07 Aug 2026 14:05
//! ────────────────────────────────────────────────────────────
//! Benchmark Index    : 7.448,12
//! Market Condition   : FAIR
//! Buffett Indicator  : 63.41 %
//! ────────────────────────────────────────────────────────────
//! Total Equity       : Rp 1.200.000
//! Cash               : Rp 500.000
//! Total Portfolio    : Rp 1.700.000
//! ────────────────────────────────────────────────────────────
//! Equity Allocation  : 70.59 %
//! Target Allocation  : 75 %
//! ────────────────────────────────────────────────────────────
//! RECOMMENDED ACTION : ADD EQUITY
//! ```
//!
//! followed by a per-position detail table and a weight bar chart.
//!
//! The engine is total at its boundary: every internal failure resolves to
//! either a rendered report or a one-line diagnostic
//! ([`engine::ReportOutcome`]). A single unavailable price degrades to the
//! holding's buy price; unavailable macro data aborts the run, because an
//! allocation target without it is meaningless.

pub mod engine;
pub mod error;
pub mod market;
pub mod model;
pub mod numeric;
pub mod report;
pub mod strategy;

pub use engine::{ReportOutcome, generate_report};
pub use error::{DashboardError, Result};
pub use market::{MarketDataGateway, MockMarketData};
pub use model::{
    DashboardConfig, EvaluatedPosition, Holding, PortfolioSnapshot, PortfolioSummary,
    SHARES_PER_LOT,
};
pub use strategy::{Action, HYSTERESIS_MARGIN, MarketCondition, recommend, valuation_ratio};
