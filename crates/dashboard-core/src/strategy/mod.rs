//! Allocation Strategy
//!
//! Valuation classification and the allocation recommendation rule.

mod allocation;
mod valuation;

pub use allocation::{Action, HYSTERESIS_MARGIN, recommend};
pub use valuation::{MarketCondition, valuation_ratio};
