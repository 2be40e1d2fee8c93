//! Black–Scholes delta and theta for European options.

use std::f64::consts::{PI, SQRT_2};

use odte_core::OptionRight;

use crate::error::EngineError;

/// Standard normal cumulative distribution function.
///
/// Built on `libm::erf`, so tail accuracy matches the platform libm
/// rather than a truncated polynomial.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / SQRT_2))
}

/// Black–Scholes delta.
///
/// `t` is time to expiry in years (1/252 for one trading day), `r` the
/// annual risk-free rate, `vol` annualized implied volatility.
///
/// At or past expiry (`t <= 0`) and at zero volatility the delta is a
/// step function: 1.0 for an in-the-money call, 0.0 otherwise, with the
/// put delta offset by -1. Never NaN.
pub fn bs_delta(spot: f64, strike: f64, t: f64, r: f64, vol: f64, right: OptionRight) -> f64 {
    if t <= 0.0 || vol <= 0.0 {
        let call_delta = if spot > strike { 1.0 } else { 0.0 };
        return match right {
            OptionRight::Call => call_delta,
            OptionRight::Put => call_delta - 1.0,
        };
    }

    let d1 = ((spot / strike).ln() + (r + 0.5 * vol * vol) * t) / (vol * t.sqrt());
    match right {
        OptionRight::Call => norm_cdf(d1),
        OptionRight::Put => norm_cdf(d1) - 1.0,
    }
}

/// Black–Scholes theta, annualized. Negative means decay.
///
/// # Errors
///
/// Returns `EngineError::NonPositiveExpiry` / `NonPositiveVol` when
/// `t <= 0` or `vol <= 0` — there is no step-function fallback here.
pub fn bs_theta(
    spot: f64,
    strike: f64,
    t: f64,
    r: f64,
    vol: f64,
    right: OptionRight,
) -> Result<f64, EngineError> {
    if t <= 0.0 {
        return Err(EngineError::NonPositiveExpiry { t });
    }
    if vol <= 0.0 {
        return Err(EngineError::NonPositiveVol { vol });
    }

    let sqrt_t = t.sqrt();
    let d1 = ((spot / strike).ln() + (r + 0.5 * vol * vol) * t) / (vol * sqrt_t);
    let d2 = d1 - vol * sqrt_t;
    let pdf = (-0.5 * d1 * d1).exp() / (2.0 * PI).sqrt();

    let decay = -(spot * pdf * vol) / (2.0 * sqrt_t);
    let carry = r * strike * (-r * t).exp();

    Ok(match right {
        OptionRight::Call => decay - carry * norm_cdf(d2),
        OptionRight::Put => decay + carry * norm_cdf(-d2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn norm_cdf_known_values() {
        assert!((norm_cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((norm_cdf(1.96) - 0.975_002_1).abs() < 1e-6);
        assert!((norm_cdf(-1.96) - 0.024_997_9).abs() < 1e-6);
        // Tails stay in [0, 1] without visible error bands.
        assert!(norm_cdf(10.0) > 0.999_999_999);
        assert!(norm_cdf(-10.0) < 1e-9);
    }

    #[test]
    fn put_call_delta_parity_holds() {
        for &(spot, strike, t, vol) in &[
            (450.0, 440.0, 1.0 / 252.0, 0.19),
            (100.0, 120.0, 0.5, 0.35),
            (100.0, 100.0, 0.25, 0.10),
        ] {
            let call = bs_delta(spot, strike, t, 0.01, vol, OptionRight::Call);
            let put = bs_delta(spot, strike, t, 0.01, vol, OptionRight::Put);
            assert!((call - put - 1.0).abs() < 1e-12, "parity broke at {spot}/{strike}");
        }
    }

    #[test]
    fn delta_is_step_function_at_expiry() {
        assert_eq!(bs_delta(105.0, 100.0, 0.0, 0.0, 0.2, OptionRight::Call), 1.0);
        assert_eq!(bs_delta(95.0, 100.0, 0.0, 0.0, 0.2, OptionRight::Call), 0.0);
        assert_eq!(bs_delta(105.0, 100.0, 0.0, 0.0, 0.2, OptionRight::Put), 0.0);
        assert_eq!(bs_delta(95.0, 100.0, 0.0, 0.0, 0.2, OptionRight::Put), -1.0);
    }

    #[test]
    fn delta_is_step_function_at_zero_vol() {
        let call = bs_delta(105.0, 100.0, 1.0 / 252.0, 0.0, 0.0, OptionRight::Call);
        let put = bs_delta(95.0, 100.0, 1.0 / 252.0, 0.0, 0.0, OptionRight::Put);
        assert_eq!(call, 1.0);
        assert_eq!(put, -1.0);
        assert!(!call.is_nan() && !put.is_nan());
    }

    #[test]
    fn atm_call_delta_near_half_for_short_expiry() {
        let delta = bs_delta(450.0, 450.0, 1.0 / 252.0, 0.0, 0.19, OptionRight::Call);
        assert!((delta - 0.5).abs() < 0.01, "ATM delta = {delta}");
    }

    #[test]
    fn theta_is_negative_for_atm_option() {
        let theta = bs_theta(450.0, 450.0, 1.0 / 252.0, 0.0, 0.19, OptionRight::Call).unwrap();
        assert!(theta < 0.0, "ATM theta = {theta}");
    }

    #[test]
    fn theta_rejects_non_positive_inputs() {
        assert!(matches!(
            bs_theta(450.0, 450.0, 0.0, 0.0, 0.19, OptionRight::Call),
            Err(EngineError::NonPositiveExpiry { .. })
        ));
        assert!(matches!(
            bs_theta(450.0, 450.0, 1.0 / 252.0, 0.0, -0.1, OptionRight::Put),
            Err(EngineError::NonPositiveVol { .. })
        ));
    }
}
