use async_trait::async_trait;

use crate::{OptionChain, Result, Series};

/// Source of intraday bars.
///
/// Implementations must return `Error::InsufficientData` rather than a
/// short series; building the result through `Series::new` does that.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch bars for `ticker` covering `range` (e.g. "1d") at `interval` (e.g. "5m").
    async fn fetch_series(&self, ticker: &str, range: &str, interval: &str) -> Result<Series>;
}

/// Source of per-strike open interest for an index.
#[async_trait]
pub trait OptionChainProvider: Send + Sync {
    async fn fetch_chain(&self, symbol: &str) -> Result<OptionChain>;
}

/// Delivers a formatted report to a single recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<()>;
}
