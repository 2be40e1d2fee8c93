//! Option chain types shared between the market-data seam and the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option right (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionRight {
    Call,
    Put,
}

impl std::fmt::Display for OptionRight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// A single row of an option chain for one expiry.
///
/// Invariants expected by the engine: `0 <= bid <= ask`, `iv > 0`.
/// Rows violating them are rejected by the selector, not repaired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    pub strike: Decimal,
    pub bid: Decimal,
    pub ask: Decimal,
    /// Annualized implied volatility as a decimal (0.20 = 20%).
    pub iv: f64,
}

impl OptionQuote {
    /// Mid-price, the fair-value proxy used for spread credit.
    pub fn mid(&self) -> Decimal {
        (self.bid + self.ask) / Decimal::TWO
    }
}

/// A same-expiry snapshot of both sides of a chain.
///
/// Row order is preserved from the provider and is semantic: the
/// selector scans quotes in exactly this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSnapshot {
    pub calls: Vec<OptionQuote>,
    pub puts: Vec<OptionQuote>,
}

impl ChainSnapshot {
    /// Quotes for one side of the chain.
    pub fn side(&self, right: OptionRight) -> &[OptionQuote] {
        match right {
            OptionRight::Call => &self.calls,
            OptionRight::Put => &self.puts,
        }
    }
}
