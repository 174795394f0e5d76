//! Market Valuation Classification
//!
//! Buckets the Buffett indicator (aggregate market capitalization over GDP,
//! as a percentage) into a market-condition label with a target equity
//! allocation per bucket.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Market capitalization / GDP × 100. Zero when GDP is not positive; the
/// engine rejects that case before classification.
pub fn valuation_ratio(market_cap: Decimal, gdp: Decimal) -> Decimal {
    if gdp <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    market_cap / gdp * dec!(100)
}

/// Overall market richness bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketCondition {
    Cheap,
    Fair,
    Expensive,
}

impl MarketCondition {
    /// Bucket a valuation ratio. Lower bounds are closed: 60 is `Fair`,
    /// 80 is `Expensive`.
    pub fn classify(ratio: Decimal) -> Self {
        if ratio < dec!(60) {
            Self::Cheap
        } else if ratio < dec!(80) {
            Self::Fair
        } else {
            Self::Expensive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cheap => "CHEAP",
            Self::Fair => "FAIR",
            Self::Expensive => "EXPENSIVE",
        }
    }

    /// Target equity allocation for this bucket, in percent.
    pub fn target_allocation(self) -> Decimal {
        match self {
            Self::Cheap => dec!(85),
            Self::Fair => dec!(75),
            Self::Expensive => dec!(65),
        }
    }
}
