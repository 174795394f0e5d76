//! Report Renderer
//!
//! Pure formatting of an evaluated portfolio into the fixed-width dashboard
//! text: 60-character banner, 90-character detail table, 40-column weight
//! bars. No computation happens here beyond presentation labeling.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use crate::model::{DashboardConfig, EvaluatedPosition, PortfolioSummary};
use crate::numeric;

const BANNER_WIDTH: usize = 60;
const TABLE_WIDTH: usize = 90;
const BAR_WIDTH: usize = 40;

const TITLE: &str = "INVESTMENT DASHBOARD";

/// Weight above this is highly concentrated regardless of the ceiling.
const HIGH_CONCENTRATION: Decimal = dec!(30);

/// Per-position concentration tier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Concentration {
    Normal,
    Elevated,
    High,
}

impl Concentration {
    /// Tier a weight against the configured ceiling and the 30% hard line.
    pub fn classify(weight_pct: Decimal, ceiling_pct: Decimal) -> Self {
        if weight_pct >= HIGH_CONCENTRATION {
            Self::High
        } else if weight_pct >= ceiling_pct {
            Self::Elevated
        } else {
            Self::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "OK",
            Self::Elevated => "ELEVATED",
            Self::High => "CONCENTRATED",
        }
    }
}

/// Render the full dashboard text.
pub fn render(
    summary: &PortfolioSummary,
    positions: &[EvaluatedPosition],
    config: &DashboardConfig,
    generated_at: DateTime<Local>,
) -> String {
    let mut out = String::new();

    render_header(&mut out, summary, generated_at);
    out.push('\n');
    render_table(&mut out, summary, positions);
    out.push('\n');
    render_weight_chart(&mut out, positions, config.max_position_weight);

    out
}

fn render_header(out: &mut String, summary: &PortfolioSummary, generated_at: DateTime<Local>) {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(BANNER_WIDTH);

    out.push_str(&banner);
    out.push('\n');
    out.push_str(&format!("{TITLE:^width$}\n", width = BANNER_WIDTH));
    out.push_str(&banner);
    out.push_str("\n\n");

    push_field(out, "Generated", generated_at.format("%d %b %Y %H:%M").to_string());
    out.push_str(&rule);
    out.push('\n');

    push_field(out, "Benchmark Index", numeric::ID.decimal(summary.benchmark_index, 2));
    push_field(out, "Market Condition", summary.market_condition.label().to_string());
    push_field(out, "Buffett Indicator", format!("{:.2} %", summary.valuation_ratio));
    out.push_str(&rule);
    out.push('\n');

    push_field(out, "Total Equity", numeric::ID.currency(summary.total_current_value));
    push_field(out, "Cash", numeric::ID.currency(summary.cash));
    push_field(out, "Total Portfolio", numeric::ID.currency(summary.total_portfolio_value));
    out.push_str(&rule);
    out.push('\n');

    push_field(out, "Equity Allocation", format!("{:.2} %", summary.equity_allocation_pct));
    push_field(out, "Target Allocation", format!("{} %", summary.target_allocation_pct));
    out.push_str(&rule);
    out.push('\n');

    push_field(out, "RECOMMENDED ACTION", summary.action.label().to_string());
}

fn push_field(out: &mut String, label: &str, value: String) {
    out.push_str(&format!("{label:<18} : {value}\n"));
}

fn render_table(out: &mut String, summary: &PortfolioSummary, positions: &[EvaluatedPosition]) {
    let heavy = "=".repeat(TABLE_WIDTH);
    let light = "-".repeat(TABLE_WIDTH);

    out.push_str(&heavy);
    out.push('\n');
    out.push_str(&format!(
        "{:<6} {:>5} {:>9} {:>14} {:>9} {:>14} {:>16} {:>8}\n",
        "Code", "Lot", "Buy", "Buy Value", "Last", "Last Value", "Gain", "Gain %"
    ));
    out.push_str(&light);
    out.push('\n');

    for pos in positions {
        out.push_str(&format!(
            "{:<6} {:>5} {:>9} {:>14} {:>9} {:>14} {:>16} {:>8} {}\n",
            pos.code,
            pos.lots,
            numeric::ID.integer(pos.buy_price),
            numeric::ID.integer(pos.buy_value),
            numeric::ID.integer(pos.last_price),
            numeric::ID.integer(pos.current_value),
            numeric::ID.signed_integer(pos.gain),
            format!("{:+.2}", pos.gain_pct),
            gain_marker(pos.gain),
        ));
    }

    out.push_str(&light);
    out.push('\n');
    out.push_str(&format!(
        "{:<6} {:>5} {:>9} {:>14} {:>9} {:>14} {:>16} {:>8} {}\n",
        "TOTAL",
        "",
        "",
        numeric::ID.integer(summary.total_buy_value),
        "",
        numeric::ID.integer(summary.total_current_value),
        numeric::ID.signed_integer(summary.total_gain),
        format!("{:+.2}", summary.total_gain_pct),
        gain_marker(summary.total_gain),
    ));
    out.push_str(&heavy);
    out.push('\n');
}

fn gain_marker(gain: Decimal) -> char {
    if gain > Decimal::ZERO {
        '▲'
    } else if gain < Decimal::ZERO {
        '▼'
    } else {
        '-'
    }
}

fn render_weight_chart(out: &mut String, positions: &[EvaluatedPosition], ceiling_pct: Decimal) {
    out.push_str(&format!("Position Weights (ceiling {ceiling_pct} %)\n"));
    out.push_str(&"-".repeat(BANNER_WIDTH));
    out.push('\n');

    let mut by_weight: Vec<&EvaluatedPosition> = positions.iter().collect();
    by_weight.sort_by(|a, b| b.weight_pct.cmp(&a.weight_pct));

    for pos in by_weight {
        let tier = Concentration::classify(pos.weight_pct, ceiling_pct);
        out.push_str(&format!(
            "{:<6} {} {:>6} %  {}\n",
            pos.code,
            weight_bar(pos.weight_pct, ceiling_pct),
            format!("{:.2}", pos.weight_pct),
            tier.label(),
        ));
    }
}

/// 40 columns represent 0-100% weight; the ceiling marker overwrites its
/// column so the bar reads against the limit.
fn weight_bar(weight_pct: Decimal, ceiling_pct: Decimal) -> String {
    let filled = to_columns(weight_pct);
    let marker = to_columns(ceiling_pct).min(BAR_WIDTH - 1);

    let mut bar: Vec<char> = (0..BAR_WIDTH)
        .map(|col| if col < filled { '█' } else { '░' })
        .collect();
    bar[marker] = '|';
    bar.into_iter().collect()
}

fn to_columns(pct: Decimal) -> usize {
    (pct * dec!(0.4))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(BAR_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Holding;
    use crate::strategy::{Action, MarketCondition};
    use chrono::TimeZone;

    fn sample_positions() -> Vec<EvaluatedPosition> {
        let mut a = EvaluatedPosition::evaluate(&Holding::new("AAA", 10, dec!(1000)), dec!(1200));
        a.weight_pct = dec!(60);
        let mut b = EvaluatedPosition::evaluate(&Holding::new("BBB", 20, dec!(400)), dec!(380));
        b.weight_pct = dec!(40);
        vec![b, a]
    }

    fn sample_summary() -> PortfolioSummary {
        PortfolioSummary {
            total_buy_value: dec!(1_800_000),
            total_current_value: dec!(1_960_000),
            total_gain: dec!(160_000),
            total_gain_pct: dec!(8.89),
            cash: dec!(500_000),
            total_portfolio_value: dec!(2_460_000),
            equity_allocation_pct: dec!(79.67),
            valuation_ratio: dec!(57.55),
            market_condition: MarketCondition::Cheap,
            target_allocation_pct: dec!(85),
            action: Action::AddEquity,
            benchmark_index: dec!(7448.12),
        }
    }

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 8, 7, 14, 5, 0).unwrap()
    }

    #[test]
    fn banner_and_rules_have_fixed_widths() {
        let text = render(
            &sample_summary(),
            &sample_positions(),
            &DashboardConfig::default(),
            fixed_time(),
        );
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0].chars().count(), BANNER_WIDTH);
        assert_eq!(lines[1].chars().count(), BANNER_WIDTH);
        assert!(
            lines
                .iter()
                .filter(|l| l.starts_with('=') && l.chars().count() == TABLE_WIDTH)
                .count()
                >= 2
        );
    }

    #[test]
    fn header_carries_summary_figures() {
        let text = render(
            &sample_summary(),
            &sample_positions(),
            &DashboardConfig::default(),
            fixed_time(),
        );

        assert!(text.contains("Generated          : 07 Aug 2026 14:05"));
        assert!(text.contains("Benchmark Index    : 7.448,12"));
        assert!(text.contains("Market Condition   : CHEAP"));
        assert!(text.contains("Buffett Indicator  : 57.55 %"));
        assert!(text.contains("Total Equity       : Rp 1.960.000"));
        assert!(text.contains("Cash               : Rp 500.000"));
        assert!(text.contains("Total Portfolio    : Rp 2.460.000"));
        assert!(text.contains("Equity Allocation  : 79.67 %"));
        assert!(text.contains("Target Allocation  : 85 %"));
        assert!(text.contains("RECOMMENDED ACTION : ADD EQUITY"));
    }

    #[test]
    fn table_rows_carry_gain_markers() {
        let text = render(
            &sample_summary(),
            &sample_positions(),
            &DashboardConfig::default(),
            fixed_time(),
        );

        let aaa = text.lines().find(|l| l.starts_with("AAA")).unwrap();
        assert!(aaa.ends_with('▲'));
        assert!(aaa.contains("+20.00"));

        let bbb = text.lines().find(|l| l.starts_with("BBB")).unwrap();
        assert!(bbb.ends_with('▼'));
    }

    #[test]
    fn chart_sorts_by_descending_weight() {
        let text = render(
            &sample_summary(),
            &sample_positions(),
            &DashboardConfig::default(),
            fixed_time(),
        );

        let chart_start = text.find("Position Weights").unwrap();
        let chart = &text[chart_start..];
        let aaa = chart.find("AAA").unwrap();
        let bbb = chart.find("BBB").unwrap();
        assert!(aaa < bbb, "heaviest position must come first");
    }

    #[test]
    fn bar_marker_sits_at_ceiling_column() {
        // ceiling 20% on a 40-column 0-100% scale: column index 8
        let bar = weight_bar(dec!(5), dec!(20));
        assert_eq!(bar.chars().count(), BAR_WIDTH);
        assert_eq!(bar.chars().nth(8), Some('|'));
        assert_eq!(bar.chars().next(), Some('█'));
    }

    #[test]
    fn oversized_ceiling_clamps_to_last_column() {
        let bar = weight_bar(dec!(5), dec!(150));
        assert_eq!(bar.chars().count(), BAR_WIDTH);
        assert_eq!(bar.chars().nth(BAR_WIDTH - 1), Some('|'));
    }

    #[test]
    fn concentration_tiers() {
        let ceiling = dec!(20);
        assert_eq!(
            Concentration::classify(dec!(10), ceiling),
            Concentration::Normal
        );
        assert_eq!(
            Concentration::classify(dec!(20), ceiling),
            Concentration::Elevated
        );
        assert_eq!(
            Concentration::classify(dec!(29.99), ceiling),
            Concentration::Elevated
        );
        assert_eq!(
            Concentration::classify(dec!(30), ceiling),
            Concentration::High
        );
    }

    #[test]
    fn empty_portfolio_renders_zeros() {
        let summary = PortfolioSummary {
            total_buy_value: Decimal::ZERO,
            total_current_value: Decimal::ZERO,
            total_gain: Decimal::ZERO,
            total_gain_pct: Decimal::ZERO,
            cash: dec!(100_000),
            total_portfolio_value: dec!(100_000),
            equity_allocation_pct: Decimal::ZERO,
            valuation_ratio: dec!(57.55),
            market_condition: MarketCondition::Cheap,
            target_allocation_pct: dec!(85),
            action: Action::AddEquity,
            benchmark_index: Decimal::ZERO,
        };

        let text = render(&summary, &[], &DashboardConfig::default(), fixed_time());
        assert!(text.contains("Total Equity       : Rp 0"));
        assert!(text.contains("Cash               : Rp 100.000"));
        assert!(text.contains("Benchmark Index    : 0,00"));
        assert!(text.contains("TOTAL"));
    }
}
