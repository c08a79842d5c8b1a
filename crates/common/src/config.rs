use std::time::Duration;

/// All configuration loaded from environment variables at startup.
/// Every setting has a fallback, so a bare environment still runs (log-only delivery).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Telegram
    pub telegram_token: Option<String>,
    pub chat_id: Option<String>,

    // Market data
    pub ticker: String,
    pub option_symbol: String,
    pub data_range: String,
    pub bar_interval: String,

    // Loop
    pub poll_interval: Duration,

    // Optional TOML file with detector/indicator tuning
    pub signal_params_path: Option<String>,
}

impl Config {
    pub const DEFAULT_TICKER: &'static str = "^NSEI";
    pub const DEFAULT_POLL_SECS: u64 = 300;

    /// Load all configuration from environment variables.
    /// Loads `.env` if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // ignore error if .env not present
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let ticker = get("TICKER").unwrap_or_else(|| Self::DEFAULT_TICKER.to_string());
        let option_symbol = get("OPTION_SYMBOL").unwrap_or_else(|| option_symbol_for(&ticker));

        Config {
            telegram_token: get("TELEGRAM_TOKEN"),
            chat_id: get("CHAT_ID"),
            option_symbol,
            ticker,
            data_range: get("DATA_RANGE").unwrap_or_else(|| "1d".to_string()),
            bar_interval: get("BAR_INTERVAL").unwrap_or_else(|| "5m".to_string()),
            poll_interval: Duration::from_secs(
                get("POLL_INTERVAL_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(Self::DEFAULT_POLL_SECS),
            ),
            signal_params_path: get("SIGNAL_PARAMS_PATH"),
        }
    }

    /// Telegram credentials, when both are configured.
    pub fn telegram(&self) -> Option<(&str, &str)> {
        match (&self.telegram_token, &self.chat_id) {
            (Some(token), Some(chat)) => Some((token.as_str(), chat.as_str())),
            _ => None,
        }
    }
}

/// Map a Yahoo index ticker to the NSE option-chain symbol.
pub fn option_symbol_for(ticker: &str) -> String {
    match ticker {
        "^NSEI" => "NIFTY".to_string(),
        "^NSEBANK" => "BANKNIFTY".to_string(),
        other => other.trim_start_matches('^').to_uppercase(),
    }
}
