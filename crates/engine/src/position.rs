//! Open spread positions with risk limits frozen at fill time.

use chrono::{DateTime, Utc};
use odte_core::OptionRight;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::Candidate;

/// Mid-price at which the loss equals twice the credit received.
const STOP_CREDIT_MULTIPLE: Decimal = dec!(2);

/// An open 0-DTE credit spread.
///
/// Built only through [`Position::open`]; every derived field is
/// computed there and nothing mutates afterwards. Live readings
/// (current mid, delta, spot) stay outside — they are passed to the
/// risk evaluator on every tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    side: OptionRight,
    short_strike: Decimal,
    long_strike: Decimal,
    credit: Decimal,
    width: Decimal,
    delta: f64,
    entry_time: DateTime<Utc>,
    stop_credit: Decimal,
    max_delta: f64,
}

impl Position {
    /// Open a position from a filled candidate.
    ///
    /// `max_delta` is the forced-exit delta cap
    /// (`EngineConfig::max_position_delta`, 0.25 by default).
    pub fn open(candidate: Candidate, entry_time: DateTime<Utc>, max_delta: f64) -> Self {
        let stop_credit = candidate.credit * STOP_CREDIT_MULTIPLE;
        Self {
            side: candidate.side,
            short_strike: candidate.short_strike,
            long_strike: candidate.long_strike,
            credit: candidate.credit,
            width: candidate.width,
            delta: candidate.delta,
            entry_time,
            stop_credit,
            max_delta,
        }
    }

    pub fn side(&self) -> OptionRight {
        self.side
    }

    pub fn short_strike(&self) -> Decimal {
        self.short_strike
    }

    pub fn long_strike(&self) -> Decimal {
        self.long_strike
    }

    /// Net premium received at entry, in dollars.
    pub fn credit(&self) -> Decimal {
        self.credit
    }

    pub fn width(&self) -> Decimal {
        self.width
    }

    /// Short-leg delta at entry time.
    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn entry_time(&self) -> DateTime<Utc> {
        self.entry_time
    }

    /// Mid-price threshold for the hard stop (credit x 2).
    pub fn stop_credit(&self) -> Decimal {
        self.stop_credit
    }

    /// Delta cap before a forced exit.
    pub fn max_delta(&self) -> f64 {
        self.max_delta
    }

    /// Underlying price at which the spread breaks even at expiry.
    pub fn breakeven(&self) -> Decimal {
        match self.side {
            OptionRight::Put => self.short_strike + self.credit,
            OptionRight::Call => self.short_strike - self.credit,
        }
    }
}
