pub mod chain;
pub mod config;
pub mod config_loader;
pub mod traits;

pub use chain::{ChainSnapshot, OptionQuote, OptionRight};
pub use config::{AppConfig, EngineConfig, EtradeConfig};
pub use config_loader::ConfigLoader;
pub use traits::{MarketDataProvider, SessionHandle, SessionProvider};
