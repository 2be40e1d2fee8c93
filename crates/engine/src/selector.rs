//! Credit-spread selection — scan a chain for the first strike beyond
//! the one-day expected move that clears credit, width, and delta
//! filters.
//!
//! The scan is first-match-wins in chain order. It is deliberately not
//! a search for the best credit or the closest delta; the first passing
//! strike is the answer.

use odte_core::{EngineConfig, OptionQuote, OptionRight};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::EngineError;
use crate::expected_move::one_day_sigma;
use crate::greeks::bs_delta;
use crate::types::Candidate;

/// Pick the first credit spread beyond the ±1σ boundary that satisfies
/// `config` (min credit, max width, max delta).
///
/// Returns `Ok(None)` when the full chain is scanned without a passing
/// strike — no qualifying trade today, which is not a failure.
///
/// # Errors
///
/// `EngineError::EmptyChain` when `chain` has no quotes, and
/// `EngineError::MalformedQuote` when any row violates the quote
/// invariants. The whole side is validated before scanning so a bad
/// row cannot be silently skipped.
pub fn pick_credit_spread(
    side: OptionRight,
    chain: &[OptionQuote],
    spot: Decimal,
    config: &EngineConfig,
) -> Result<Option<Candidate>, EngineError> {
    if chain.is_empty() {
        return Err(EngineError::EmptyChain { side });
    }
    for quote in chain {
        validate_quote(quote)?;
    }

    // Equal-weighted mean IV across the side, not volume-weighted.
    let mean_iv = chain.iter().map(|q| q.iv).sum::<f64>() / chain.len() as f64;

    let spot_px = spot.to_f64().unwrap_or(0.0);
    let sigma = one_day_sigma(spot_px, mean_iv, config.trading_days);
    let t = 1.0 / f64::from(config.trading_days);
    debug!(%side, %spot, mean_iv, sigma, "Scanning chain for credit spread");

    for quote in chain {
        let strike_px = quote.strike.to_f64().unwrap_or(0.0);
        let beyond_sigma = match side {
            OptionRight::Put => strike_px < spot_px - sigma,
            OptionRight::Call => strike_px > spot_px + sigma,
        };
        if !beyond_sigma {
            continue;
        }

        let credit = quote.mid();

        // The long leg target sits max_width further out-of-the-money;
        // the width is nominal — no quote needs to exist at the target.
        let long_target = match side {
            OptionRight::Put => quote.strike - config.max_width,
            OptionRight::Call => quote.strike + config.max_width,
        };
        let width = (quote.strike - long_target).abs();
        if width > config.max_width || credit < config.min_credit {
            continue;
        }

        let delta = bs_delta(spot_px, strike_px, t, 0.0, mean_iv, side).abs();
        if delta >= config.max_delta {
            continue;
        }

        let long_strike = match side {
            OptionRight::Put => quote.strike - width,
            OptionRight::Call => quote.strike + width,
        };
        let candidate = Candidate {
            side,
            short_strike: quote.strike,
            long_strike,
            credit,
            width,
            delta,
        };
        info!(
            candidate = %candidate.display_name(),
            delta, "Credit spread selected"
        );
        return Ok(Some(candidate));
    }

    debug!(%side, "No strike passed all filters");
    Ok(None)
}

fn validate_quote(quote: &OptionQuote) -> Result<(), EngineError> {
    if quote.bid < Decimal::ZERO || quote.ask < Decimal::ZERO {
        return Err(EngineError::MalformedQuote {
            strike: quote.strike,
            reason: "negative bid or ask".to_string(),
        });
    }
    if quote.bid > quote.ask {
        return Err(EngineError::MalformedQuote {
            strike: quote.strike,
            reason: "crossed market (bid > ask)".to_string(),
        });
    }
    if !quote.iv.is_finite() || quote.iv <= 0.0 {
        return Err(EngineError::MalformedQuote {
            strike: quote.strike,
            reason: "implied volatility must be positive and finite".to_string(),
        });
    }
    Ok(())
}
