use crate::chain::ChainSnapshot;
use anyhow::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An authenticated broker session, usable for future order placement.
///
/// The decision engine never touches this; only the surrounding
/// execution loop does.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHandle {
    pub access_token: String,
    pub access_token_secret: String,
}

/// Live quote and chain source for one underlying.
///
/// Implementations must fail when a ticker yields no data rather than
/// return an empty snapshot; retry and caching policy belong to the
/// implementation, not to callers.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn underlying_price(&self, ticker: &str) -> Result<Decimal>;
    async fn option_chain(&self, ticker: &str) -> Result<ChainSnapshot>;
}

/// Credential-backed broker session source.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn session(&self) -> Result<SessionHandle>;
}
