//! Engine output types.

use odte_core::OptionRight;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A proposed 0-DTE credit spread, produced by the selector.
///
/// A Candidate is a proposal only; it becomes a
/// [`Position`](crate::position::Position) at fill time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub side: OptionRight,
    pub short_strike: Decimal,
    pub long_strike: Decimal,
    /// Net premium received at the short leg's mid-price, in dollars.
    pub credit: Decimal,
    /// Distance between the strikes, in dollars.
    pub width: Decimal,
    /// Absolute Black–Scholes delta of the short leg at selection time.
    pub delta: f64,
}

impl Candidate {
    /// Human-readable description (e.g., "put 440/435 @ 0.15").
    pub fn display_name(&self) -> String {
        format!(
            "{} {}/{} @ {}",
            self.side, self.short_strike, self.long_strike, self.credit
        )
    }
}
