use serde::{Deserialize, Serialize};

use common::{Error, Result};

/// Indicator and detector tuning (TOML).
///
/// Every field is optional in the file; omitted keys keep their defaults.
///
/// Example `config/signal.toml`:
/// ```toml
/// ema_fast_span = 9
/// ema_slow_span = 21
/// rsi_period = 14
/// volume_window = 5
/// doji_body_ratio = 0.3
/// zone_tolerance = 0.002
/// min_score = 2
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalParams {
    pub ema_fast_span: usize,
    pub ema_slow_span: usize,
    pub rsi_period: usize,
    pub volume_window: usize,
    /// A candle is a doji when its body is below this fraction of its range.
    pub doji_body_ratio: f64,
    /// Relative distance from the previous low/high that counts as "near".
    pub zone_tolerance: f64,
    /// Points a side needs before it can win.
    pub min_score: u8,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            ema_fast_span: 9,
            ema_slow_span: 21,
            rsi_period: 14,
            volume_window: 5,
            doji_body_ratio: 0.3,
            zone_tolerance: 0.002,
            min_score: 2,
        }
    }
}

impl SignalParams {
    /// Load from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("failed to parse signal params at '{path}': {e}")))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let params: Self = toml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<()> {
        if self.ema_fast_span == 0 || self.ema_slow_span == 0 {
            return Err(Error::Config("EMA spans must be >= 1".into()));
        }
        if self.rsi_period < 2 {
            return Err(Error::Config("rsi_period must be >= 2".into()));
        }
        if self.volume_window == 0 {
            return Err(Error::Config("volume_window must be >= 1".into()));
        }
        if self.min_score == 0 {
            return Err(Error::Config("min_score must be >= 1".into()));
        }
        Ok(())
    }
}
