//! Engine error taxonomy.
//!
//! Input problems (empty or invariant-violating chains, bad theta
//! inputs) are errors. "No qualifying trade" and "keep holding" are
//! `None`, never errors — callers must be able to tell the two apart.

use odte_core::OptionRight;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The requested side of the chain has no quotes at all.
    #[error("option chain has no {side} quotes")]
    EmptyChain { side: OptionRight },

    /// A chain row violates quote invariants (0 <= bid <= ask, iv > 0).
    #[error("malformed quote at strike {strike}: {reason}")]
    MalformedQuote { strike: Decimal, reason: String },

    /// Theta requires positive time to expiry.
    #[error("theta undefined for non-positive time to expiry ({t})")]
    NonPositiveExpiry { t: f64 },

    /// Theta requires positive volatility.
    #[error("theta undefined for non-positive volatility ({vol})")]
    NonPositiveVol { vol: f64 },
}
