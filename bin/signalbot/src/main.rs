use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use common::{Config, Notifier};
use engine::{Cycle, CycleSettings, NseClient, SignalLoop, YahooClient};
use strategy::{DecisionEngine, SignalParams};
use telegram_notify::{LogNotifier, TelegramNotifier};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // ── Logging ──────────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    // ── Config ────────────────────────────────────────────────────────────────
    let cfg = Config::from_env();
    info!(ticker = %cfg.ticker, option_symbol = %cfg.option_symbol, "SignalBot starting");

    let params = match &cfg.signal_params_path {
        Some(path) => SignalParams::load(path)
            .with_context(|| format!("loading signal params from '{path}'"))?,
        None => SignalParams::default(),
    };

    // ── Collaborators ─────────────────────────────────────────────────────────
    let market = Arc::new(YahooClient::new().context("building Yahoo client")?);
    let options = Arc::new(NseClient::new().context("building NSE client")?);
    let notifier: Arc<dyn Notifier> = match cfg.telegram() {
        Some((token, chat_id)) => Arc::new(TelegramNotifier::new(token, chat_id)),
        None => {
            warn!("TELEGRAM_TOKEN or CHAT_ID not set, reports will only be logged");
            Arc::new(LogNotifier)
        }
    };

    // ── Loop ──────────────────────────────────────────────────────────────────
    let cycle = Cycle::new(
        CycleSettings::from(&cfg),
        DecisionEngine::new(params),
        market,
        options,
        notifier,
    );
    let signal_loop = SignalLoop::new(cycle, cfg.poll_interval);

    // An in-flight cycle is dropped on shutdown.
    tokio::select! {
        _ = signal_loop.run() => {}
        res = tokio::signal::ctrl_c() => {
            res.context("waiting for shutdown signal")?;
            info!("Shutdown signal received. Exiting.");
        }
    }
    Ok(())
}
