//! One-period expected-move sizing from annualized implied volatility.

/// Dollar size of a one-day ±1σ move.
///
/// Converts annual IV to a daily volatility factor (`iv / sqrt(days)`)
/// and scales by spot.
pub fn one_day_sigma(spot: f64, iv_annual: f64, trading_days: u32) -> f64 {
    let daily_vol = iv_annual / f64::from(trading_days).sqrt();
    spot * daily_vol
}

/// Lower and upper price boundaries of the one-day ±1σ band.
pub fn expected_move_range(spot: f64, iv_annual: f64, trading_days: u32) -> (f64, f64) {
    let sigma = one_day_sigma(spot, iv_annual, trading_days);
    (spot - sigma, spot + sigma)
}
