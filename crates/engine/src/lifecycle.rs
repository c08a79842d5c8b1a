use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tracing::{error, info, warn};

use common::{Config, MarketDataProvider, Notifier, OptionChainProvider, Result, Signal};
use strategy::detectors::read_option_bias;
use strategy::DecisionEngine;

use crate::report::format_report;

/// Market and symbol settings for one decision cycle.
#[derive(Debug, Clone)]
pub struct CycleSettings {
    pub ticker: String,
    pub option_symbol: String,
    pub data_range: String,
    pub bar_interval: String,
}

impl From<&Config> for CycleSettings {
    fn from(cfg: &Config) -> Self {
        Self {
            ticker: cfg.ticker.clone(),
            option_symbol: cfg.option_symbol.clone(),
            data_range: cfg.data_range.clone(),
            bar_interval: cfg.bar_interval.clone(),
        }
    }
}

/// One fetch → evaluate → report → deliver pass. Holds no state between runs.
pub struct Cycle {
    settings: CycleSettings,
    engine: DecisionEngine,
    market: Arc<dyn MarketDataProvider>,
    options: Arc<dyn OptionChainProvider>,
    notifier: Arc<dyn Notifier>,
}

impl Cycle {
    pub fn new(
        settings: CycleSettings,
        engine: DecisionEngine,
        market: Arc<dyn MarketDataProvider>,
        options: Arc<dyn OptionChainProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            settings,
            engine,
            market,
            options,
            notifier,
        }
    }

    /// Run a single cycle.
    ///
    /// Fails only when market data cannot be fetched. Option-chain and
    /// delivery failures are logged and absorbed.
    pub async fn run_once(&self) -> Result<Signal> {
        let s = &self.settings;
        let series = self
            .market
            .fetch_series(&s.ticker, &s.data_range, &s.bar_interval)
            .await?;
        info!(ticker = %s.ticker, bars = series.len(), "Market data fetched");

        let bias = read_option_bias(self.options.as_ref(), &s.option_symbol).await;
        let signal = self.engine.evaluate(&series, bias, Local::now());

        let report = format_report(&signal);
        info!("\n{report}");
        if let Err(e) = self.notifier.send(&report).await {
            warn!(error = %e, "Failed to deliver report");
        }

        Ok(signal)
    }
}

/// Counts of cycle outcomes from a bounded run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleStats {
    pub completed: usize,
    pub insufficient_data: usize,
    pub failed: usize,
}

impl CycleStats {
    pub fn total(&self) -> usize {
        self.completed + self.insufficient_data + self.failed
    }
}

/// Drives [`Cycle`] on a fixed period.
///
/// Cycles run strictly one after another; the sleep starts when a cycle
/// ends. Each cycle runs in its own task so a panic is contained and
/// logged like any other error.
pub struct SignalLoop {
    cycle: Arc<Cycle>,
    poll_interval: Duration,
}

impl SignalLoop {
    pub fn new(cycle: Cycle, poll_interval: Duration) -> Self {
        Self {
            cycle: Arc::new(cycle),
            poll_interval,
        }
    }

    /// Run forever. Call from `main` or `tokio::spawn`.
    pub async fn run(self) {
        info!(interval = ?self.poll_interval, "Signal loop running");
        self.run_cycles(None).await;
    }

    /// Run `limit` cycles (or forever when `None`), sleeping between them.
    pub async fn run_cycles(&self, limit: Option<usize>) -> CycleStats {
        let mut stats = CycleStats::default();

        loop {
            let cycle = self.cycle.clone();
            match tokio::spawn(async move { cycle.run_once().await }).await {
                Ok(Ok(signal)) => {
                    stats.completed += 1;
                    info!(suggestion = %signal.suggestion, "Cycle complete");
                }
                Ok(Err(e)) if e.is_insufficient_data() => {
                    stats.insufficient_data += 1;
                    warn!(error = %e, "Cycle skipped");
                }
                Ok(Err(e)) => {
                    stats.failed += 1;
                    error!(error = %e, "Cycle failed");
                }
                Err(e) => {
                    stats.failed += 1;
                    error!(error = %e, "Cycle aborted");
                }
            }

            if limit.is_some_and(|n| stats.total() >= n) {
                return stats;
            }
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}
