use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Process-level configuration, loaded once and read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Underlying symbol to trade (e.g., "SPY").
    pub ticker: String,
    pub engine: EngineConfig,
    pub etrade: EtradeConfig,
}

/// Tunables for spread selection and position risk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum acceptable net credit in dollars.
    pub min_credit: Decimal,
    /// Maximum distance between short and long strikes in dollars.
    pub max_width: Decimal,
    /// Reject candidates whose short-leg |delta| reaches this value.
    pub max_delta: f64,
    /// Trading days per year used to annualize one-day moves.
    pub trading_days: u32,
    /// Delta cap on an open position before a forced exit.
    pub max_position_delta: f64,
}

/// Brokerage/auth parameters for the session collaborator.
///
/// The engine never reads these; they are carried so the surrounding
/// execution loop can build an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtradeConfig {
    pub base_url: String,
    pub consumer_key: String,
    pub consumer_secret: String,
    /// Where persisted OAuth tokens live between runs.
    pub oauth_token_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ticker: "SPY".to_string(),
            engine: EngineConfig::default(),
            etrade: EtradeConfig::default(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_credit: Decimal::new(15, 2), // 0.15
            max_width: Decimal::ONE,
            max_delta: 0.20,
            trading_days: 252,
            max_position_delta: 0.25,
        }
    }
}

impl Default for EtradeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://apisb.etrade.com".to_string(),
            consumer_key: String::new(),
            consumer_secret: String::new(),
            oauth_token_path: "etrade_tokens.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn engine_defaults_match_documented_tunables() {
        let config = EngineConfig::default();
        assert_eq!(config.min_credit, dec!(0.15));
        assert_eq!(config.max_width, dec!(1));
        assert!((config.max_delta - 0.20).abs() < f64::EPSILON);
        assert_eq!(config.trading_days, 252);
        assert!((config.max_position_delta - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn app_config_round_trips_through_serde() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ticker, "SPY");
        assert_eq!(back.engine.min_credit, config.engine.min_credit);
        assert_eq!(back.etrade.base_url, config.etrade.base_url);
    }
}
