//! Allocation Recommendation Rule
//!
//! Compares the current equity allocation against the valuation-derived
//! target. The hysteresis margin keeps the recommendation from flapping
//! when the allocation hovers at the target.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Margin below target, in percentage points, before a buy is recommended.
pub const HYSTERESIS_MARGIN: Decimal = Decimal::TWO;

/// Recommended portfolio action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    AddEquity,
    HoldRebalance,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Self::AddEquity => "ADD EQUITY",
            Self::HoldRebalance => "HOLD / REBALANCE",
        }
    }
}

/// `AddEquity` only when the allocation sits strictly below
/// target − margin; everything at or above the threshold holds.
pub fn recommend(allocation_pct: Decimal, target_pct: Decimal) -> Action {
    if allocation_pct < target_pct - HYSTERESIS_MARGIN {
        Action::AddEquity
    } else {
        Action::HoldRebalance
    }
}
