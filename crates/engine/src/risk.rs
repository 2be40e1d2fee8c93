//! Exit rules for open spreads — ordered, first match wins.
//!
//! Profit-taking is checked before capital protection: a position that
//! looks stopped out by delta but has already hit its target exits as
//! `TargetHit`. The ordering is part of the contract, not an
//! optimization.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use odte_core::OptionRight;

use crate::position::Position;

/// Why a position should be closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitSignal {
    /// Spread mid fell to half the credit received.
    TargetHit,
    /// Spread mid reached the stop threshold, or delta breached the cap.
    StopLoss,
    /// Underlying crossed the breakeven price.
    Breach,
}

impl std::fmt::Display for ExitSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TargetHit => write!(f, "target_hit"),
            Self::StopLoss => write!(f, "stop_loss"),
            Self::Breach => write!(f, "breach"),
        }
    }
}

/// Decide whether to exit. `None` means hold.
///
/// Pure over its inputs: identical readings always yield the identical
/// decision. Rules are evaluated in a fixed order and the first match
/// wins.
pub fn should_exit(
    position: &Position,
    current_mid: Decimal,
    current_delta: f64,
    spot: Decimal,
) -> Option<ExitSignal> {
    if let Some(signal) = check_profit_target(position, current_mid) {
        return Some(signal);
    }
    if let Some(signal) = check_stop_loss(position, current_mid, current_delta) {
        return Some(signal);
    }
    if let Some(signal) = check_breach(position, spot) {
        return Some(signal);
    }
    None
}

/// Target: spread mid decayed to 50% of the credit received.
fn check_profit_target(position: &Position, current_mid: Decimal) -> Option<ExitSignal> {
    if current_mid <= position.credit() * dec!(0.5) {
        info!(
            short_strike = %position.short_strike(),
            %current_mid,
            credit = %position.credit(),
            "Profit target hit"
        );
        return Some(ExitSignal::TargetHit);
    }
    None
}

/// Hard stop: mid at or past stop_credit, or delta at or past the cap.
fn check_stop_loss(
    position: &Position,
    current_mid: Decimal,
    current_delta: f64,
) -> Option<ExitSignal> {
    if current_mid >= position.stop_credit() || current_delta >= position.max_delta() {
        warn!(
            short_strike = %position.short_strike(),
            %current_mid,
            stop_credit = %position.stop_credit(),
            current_delta,
            max_delta = position.max_delta(),
            "Stop loss triggered"
        );
        return Some(ExitSignal::StopLoss);
    }
    None
}

/// Breach: underlying crossed the breakeven price.
fn check_breach(position: &Position, spot: Decimal) -> Option<ExitSignal> {
    let breakeven = position.breakeven();
    let breached = match position.side() {
        OptionRight::Put => spot < breakeven,
        OptionRight::Call => spot > breakeven,
    };
    if breached {
        warn!(
            short_strike = %position.short_strike(),
            %spot,
            %breakeven,
            "Breakeven breached"
        );
        return Some(ExitSignal::Breach);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Candidate;
    use chrono::Utc;

    fn put_position() -> Position {
        let candidate = Candidate {
            side: OptionRight::Put,
            short_strike: dec!(440),
            long_strike: dec!(435),
            credit: dec!(0.50),
            width: dec!(5),
            delta: 0.12,
        };
        Position::open(candidate, Utc::now(), 0.25)
    }

    fn call_position() -> Position {
        let candidate = Candidate {
            side: OptionRight::Call,
            short_strike: dec!(440),
            long_strike: dec!(445),
            credit: dec!(0.50),
            width: dec!(5),
            delta: 0.12,
        };
        Position::open(candidate, Utc::now(), 0.25)
    }

    #[test]
    fn target_hit_at_half_the_credit() {
        let position = put_position();
        assert_eq!(
            should_exit(&position, dec!(0.24), 0.10, dec!(450)),
            Some(ExitSignal::TargetHit)
        );
        // Boundary is inclusive.
        assert_eq!(
            should_exit(&position, dec!(0.25), 0.10, dec!(450)),
            Some(ExitSignal::TargetHit)
        );
    }

    #[test]
    fn stop_loss_on_mid_reaching_stop_credit() {
        let position = put_position();
        assert_eq!(
            should_exit(&position, dec!(1.10), 0.10, dec!(450)),
            Some(ExitSignal::StopLoss)
        );
    }

    #[test]
    fn stop_loss_on_delta_breaching_the_cap() {
        let position = put_position();
        assert_eq!(
            should_exit(&position, dec!(0.60), 0.30, dec!(450)),
            Some(ExitSignal::StopLoss)
        );
    }

    #[test]
    fn target_outranks_simultaneous_stop_conditions() {
        // Delta says stop, mid says target — profit-taking is checked
        // first, so the position exits as TargetHit.
        let position = put_position();
        assert_eq!(
            should_exit(&position, dec!(0.20), 0.90, dec!(430)),
            Some(ExitSignal::TargetHit)
        );
    }

    #[test]
    fn put_breach_below_breakeven() {
        // breakeven = 440 + 0.50; only reached after target and stop
        // both decline to fire.
        let position = put_position();
        assert_eq!(
            should_exit(&position, dec!(0.60), 0.10, dec!(438)),
            Some(ExitSignal::Breach)
        );
    }

    #[test]
    fn call_breach_above_breakeven() {
        // breakeven = 440 - 0.50
        let position = call_position();
        assert_eq!(
            should_exit(&position, dec!(0.60), 0.10, dec!(441)),
            Some(ExitSignal::Breach)
        );
    }

    #[test]
    fn holds_when_no_rule_fires() {
        let position = put_position();
        assert_eq!(should_exit(&position, dec!(0.60), 0.10, dec!(450)), None);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let position = put_position();
        let first = should_exit(&position, dec!(0.60), 0.10, dec!(438));
        let second = should_exit(&position, dec!(0.60), 0.10, dec!(438));
        assert_eq!(first, second);
    }

    #[test]
    fn signals_display_as_snake_case() {
        assert_eq!(ExitSignal::TargetHit.to_string(), "target_hit");
        assert_eq!(ExitSignal::StopLoss.to_string(), "stop_loss");
        assert_eq!(ExitSignal::Breach.to_string(), "breach");
    }
}
