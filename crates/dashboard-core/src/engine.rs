//! Evaluation Pipeline
//!
//! One run per trigger: resolve macro figures, fan out price lookups,
//! evaluate and aggregate positions, classify the market, pick an action,
//! render. The entry point is total at its boundary; every failure resolves
//! to either a rendered report or a one-line diagnostic.

use chrono::Local;
use futures::future::join_all;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::market::MarketDataGateway;
use crate::model::{DashboardConfig, EvaluatedPosition, PortfolioSnapshot, PortfolioSummary};
use crate::report;
use crate::strategy::{self, MarketCondition};

/// Outcome of one run: the dashboard text, or a one-line diagnostic when
/// macro data is unavailable. Never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReportOutcome {
    Report(String),
    Diagnostic(String),
}

impl ReportOutcome {
    /// The text to deliver, whichever variant was produced.
    pub fn text(&self) -> &str {
        match self {
            Self::Report(s) | Self::Diagnostic(s) => s,
        }
    }

    pub fn is_report(&self) -> bool {
        matches!(self, Self::Report(_))
    }
}

/// Aggregate totals across evaluated positions.
#[derive(Clone, Debug, Default)]
pub struct Totals {
    pub total_buy_value: Decimal,
    pub total_current_value: Decimal,
    pub total_gain: Decimal,
    pub total_gain_pct: Decimal,
    pub total_portfolio_value: Decimal,
    pub equity_allocation_pct: Decimal,
}

/// Sum position values, assign per-position weights, and derive the
/// cash-inclusive totals. Weights sum to 100 whenever total current value
/// is positive; every ratio degrades to zero instead of dividing by zero.
pub fn aggregate(positions: &mut [EvaluatedPosition], cash: Decimal) -> Totals {
    let total_buy_value: Decimal = positions.iter().map(|p| p.buy_value).sum();
    let total_current_value: Decimal = positions.iter().map(|p| p.current_value).sum();

    for pos in positions.iter_mut() {
        pos.weight_pct = if total_current_value > Decimal::ZERO {
            pos.current_value / total_current_value * dec!(100)
        } else {
            Decimal::ZERO
        };
    }

    let total_gain = total_current_value - total_buy_value;
    let total_gain_pct = if total_buy_value > Decimal::ZERO {
        total_gain / total_buy_value * dec!(100)
    } else {
        Decimal::ZERO
    };

    let total_portfolio_value = total_current_value + cash;
    let equity_allocation_pct = if total_portfolio_value > Decimal::ZERO {
        total_current_value / total_portfolio_value * dec!(100)
    } else {
        Decimal::ZERO
    };

    Totals {
        total_buy_value,
        total_current_value,
        total_gain,
        total_gain_pct,
        total_portfolio_value,
        equity_allocation_pct,
    }
}

/// Run the full pipeline once and produce the deliverable text.
pub async fn generate_report(
    snapshot: &PortfolioSnapshot,
    config: &DashboardConfig,
    gateway: &dyn MarketDataGateway,
) -> ReportOutcome {
    tracing::info!(
        holdings = snapshot.holdings.len(),
        gateway = gateway.name(),
        "generating dashboard"
    );

    // Macro data first: without both figures the allocation target is
    // meaningless, so either one missing aborts the run. A config override
    // skips the lookup entirely.
    let gdp = match config.gdp_usd {
        Some(v) => v,
        None => match check_macro(gateway.gdp_usd(&config.country).await, "GDP") {
            Ok(v) => v,
            Err(diagnostic) => return ReportOutcome::Diagnostic(diagnostic),
        },
    };
    let market_cap = match config.market_cap_usd {
        Some(v) => v,
        None => match check_macro(gateway.market_cap_usd(&config.country).await, "market cap") {
            Ok(v) => v,
            Err(diagnostic) => return ReportOutcome::Diagnostic(diagnostic),
        },
    };

    // One lookup per holding, issued concurrently; a failed quote degrades
    // to the buy price and the position still renders.
    let prices = join_all(
        snapshot
            .holdings
            .iter()
            .map(|h| gateway.latest_price_or(&h.code, h.buy_price)),
    )
    .await;

    let mut positions: Vec<EvaluatedPosition> = snapshot
        .holdings
        .iter()
        .zip(prices)
        .map(|(holding, price)| EvaluatedPosition::evaluate(holding, price))
        .collect();

    let totals = aggregate(&mut positions, snapshot.cash);

    let benchmark_index = match gateway.benchmark_index().await {
        Ok(level) => level,
        Err(e) => {
            tracing::warn!("benchmark index lookup failed: {e}; rendering zero");
            Decimal::ZERO
        }
    };

    let valuation_ratio = strategy::valuation_ratio(market_cap, gdp);
    let market_condition = MarketCondition::classify(valuation_ratio);
    let target_allocation_pct = market_condition.target_allocation();
    let action = strategy::recommend(totals.equity_allocation_pct, target_allocation_pct);

    let summary = PortfolioSummary {
        total_buy_value: totals.total_buy_value,
        total_current_value: totals.total_current_value,
        total_gain: totals.total_gain,
        total_gain_pct: totals.total_gain_pct,
        cash: snapshot.cash,
        total_portfolio_value: totals.total_portfolio_value,
        equity_allocation_pct: totals.equity_allocation_pct,
        valuation_ratio,
        market_condition,
        target_allocation_pct,
        action,
        benchmark_index,
    };

    ReportOutcome::Report(report::render(&summary, &positions, config, Local::now()))
}

/// A gateway macro figure must be present and positive to be usable.
/// The `Err` carries the user-facing diagnostic line.
fn check_macro(
    looked_up: crate::error::Result<Decimal>,
    what: &str,
) -> std::result::Result<Decimal, String> {
    match looked_up {
        Ok(v) if v > Decimal::ZERO => Ok(v),
        Ok(v) => {
            tracing::error!("{what} lookup returned non-positive value {v}");
            Err(format!("Macro data unavailable: {what} figure not usable"))
        }
        Err(e) => {
            tracing::error!("{what} lookup failed: {e}");
            Err(format!("Macro data unavailable: {what} lookup failed"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::MockMarketData;
    use crate::model::Holding;

    fn snapshot_one(code: &str, lots: u32, buy: Decimal, cash: Decimal) -> PortfolioSnapshot {
        PortfolioSnapshot::new(vec![Holding::new(code, lots, buy)], cash)
    }

    #[test]
    fn aggregate_weights_sum_to_one_hundred() {
        let mut positions = vec![
            EvaluatedPosition::evaluate(&Holding::new("AAA", 10, dec!(1000)), dec!(1200)),
            EvaluatedPosition::evaluate(&Holding::new("BBB", 7, dec!(250)), dec!(260)),
            EvaluatedPosition::evaluate(&Holding::new("CCC", 3, dec!(4100)), dec!(3990)),
        ];
        aggregate(&mut positions, dec!(500_000));

        let weight_sum: Decimal = positions.iter().map(|p| p.weight_pct).sum();
        assert!((weight_sum - dec!(100)).abs() < dec!(0.000001));
    }

    #[test]
    fn aggregate_empty_portfolio_is_all_zero() {
        let mut positions = Vec::new();
        let totals = aggregate(&mut positions, dec!(100_000));

        assert_eq!(totals.total_current_value, Decimal::ZERO);
        assert_eq!(totals.total_gain_pct, Decimal::ZERO);
        assert_eq!(totals.total_portfolio_value, dec!(100_000));
        assert_eq!(totals.equity_allocation_pct, Decimal::ZERO);
    }

    #[test]
    fn aggregate_zero_value_positions_have_zero_weights() {
        let mut positions = vec![
            EvaluatedPosition::evaluate(&Holding::new("AAA", 10, dec!(0)), dec!(0)),
            EvaluatedPosition::evaluate(&Holding::new("BBB", 5, dec!(0)), dec!(0)),
        ];
        let totals = aggregate(&mut positions, Decimal::ZERO);

        assert!(positions.iter().all(|p| p.weight_pct == Decimal::ZERO));
        assert_eq!(totals.equity_allocation_pct, Decimal::ZERO);
    }

    #[test]
    fn aggregate_matches_worked_example() {
        let mut positions = vec![EvaluatedPosition::evaluate(
            &Holding::new("AAA", 10, dec!(1000)),
            dec!(1200),
        )];
        let totals = aggregate(&mut positions, dec!(500_000));

        assert_eq!(totals.total_buy_value, dec!(1_000_000));
        assert_eq!(totals.total_current_value, dec!(1_200_000));
        assert_eq!(totals.total_gain, dec!(200_000));
        assert_eq!(totals.total_gain_pct, dec!(20));
        assert_eq!(totals.total_portfolio_value, dec!(1_700_000));
        assert_eq!(totals.equity_allocation_pct.round_dp(2), dec!(70.59));
        assert_eq!(positions[0].weight_pct, dec!(100));
    }

    #[tokio::test]
    async fn report_for_worked_example() {
        let gateway = MockMarketData::new().with_price("AAA", dec!(1200));
        let snapshot = snapshot_one("AAA", 10, dec!(1000), dec!(500_000));
        let config = DashboardConfig::default();

        let outcome = generate_report(&snapshot, &config, &gateway).await;
        assert!(outcome.is_report());

        let text = outcome.text();
        assert!(text.contains("Buffett Indicator  : 57.55 %"));
        assert!(text.contains("Market Condition   : CHEAP"));
        assert!(text.contains("Equity Allocation  : 70.59 %"));
        assert!(text.contains("Target Allocation  : 85 %"));
        assert!(text.contains("RECOMMENDED ACTION : ADD EQUITY"));
        assert!(text.contains("Total Portfolio    : Rp 1.700.000"));
    }

    #[tokio::test]
    async fn failed_quote_falls_back_to_buy_price() {
        let gateway = MockMarketData::new().without_price("ZZZZ");
        let snapshot = snapshot_one("ZZZZ", 10, dec!(1000), Decimal::ZERO);

        let outcome = generate_report(&snapshot, &DashboardConfig::default(), &gateway).await;
        let text = outcome.text();

        // price fell back to the buy price, so the position shows no gain
        assert!(text.contains("+0.00"));
        assert!(text.contains("Total Equity       : Rp 1.000.000"));
    }

    #[tokio::test]
    async fn missing_macro_data_is_diagnostic() {
        let gateway = MockMarketData::new().without_macro();
        let snapshot = snapshot_one("BBCA", 10, dec!(1000), dec!(500_000));

        let outcome = generate_report(&snapshot, &DashboardConfig::default(), &gateway).await;
        assert!(!outcome.is_report());
        assert!(outcome.text().starts_with("Macro data unavailable"));
    }

    #[tokio::test]
    async fn macro_overrides_skip_gateway_lookup() {
        let gateway = MockMarketData::new().without_macro();
        let snapshot = snapshot_one("BBCA", 10, dec!(1000), dec!(500_000));
        let config = DashboardConfig {
            gdp_usd: Some(dec!(1_000_000_000_000)),
            market_cap_usd: Some(dec!(900_000_000_000)),
            ..DashboardConfig::default()
        };

        let outcome = generate_report(&snapshot, &config, &gateway).await;
        assert!(outcome.is_report());
        assert!(outcome.text().contains("Buffett Indicator  : 90.00 %"));
        assert!(outcome.text().contains("Market Condition   : EXPENSIVE"));
    }

    #[tokio::test]
    async fn failed_benchmark_renders_zero() {
        let gateway = MockMarketData::new().without_benchmark();
        let snapshot = snapshot_one("BBCA", 10, dec!(1000), Decimal::ZERO);

        let outcome = generate_report(&snapshot, &DashboardConfig::default(), &gateway).await;
        assert!(outcome.is_report());
        assert!(outcome.text().contains("Benchmark Index    : 0,00"));
    }

    #[tokio::test]
    async fn empty_portfolio_still_reports() {
        let gateway = MockMarketData::new();
        let snapshot = PortfolioSnapshot::new(Vec::new(), dec!(100_000));

        let outcome = generate_report(&snapshot, &DashboardConfig::default(), &gateway).await;
        assert!(outcome.is_report());
        assert!(outcome.text().contains("Equity Allocation  : 0.00 %"));
    }
}
