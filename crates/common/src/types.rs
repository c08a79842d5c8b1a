use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One OHLCV sample for a fixed time interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Time-ordered bars from a single fetch.
///
/// Construction guarantees at least [`Series::MIN_BARS`] bars with strictly
/// ascending timestamps, so `latest()` and `previous()` always exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    /// Two prior bars for comparisons plus the bar being evaluated.
    pub const MIN_BARS: usize = 3;

    pub fn new(bars: Vec<Bar>) -> Result<Self> {
        if bars.len() < Self::MIN_BARS {
            return Err(Error::InsufficientData {
                required: Self::MIN_BARS,
                actual: bars.len(),
            });
        }
        if let Some(w) = bars.windows(2).find(|w| w[1].timestamp <= w[0].timestamp) {
            return Err(Error::InvalidSeries(format!(
                "timestamps not strictly ascending at {}",
                w[1].timestamp
            )));
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn latest(&self) -> &Bar {
        &self.bars[self.bars.len() - 1]
    }

    pub fn previous(&self) -> &Bar {
        &self.bars[self.bars.len() - 2]
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }
}

/// Two-bar candlestick classification of the latest bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandlePattern {
    BullishEngulfing,
    BearishEngulfing,
    Doji,
    NoPattern,
}

impl std::fmt::Display for CandlePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CandlePattern::BullishEngulfing => write!(f, "Bullish Engulfing"),
            CandlePattern::BearishEngulfing => write!(f, "Bearish Engulfing"),
            CandlePattern::Doji => write!(f, "Doji"),
            CandlePattern::NoPattern => write!(f, "No Pattern"),
        }
    }
}

/// Price direction confirmed (strong) or not (weak) by volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VolumeTrend {
    StrongUptrend,
    WeakUptrend,
    StrongDowntrend,
    WeakDowntrend,
    Neutral,
}

impl std::fmt::Display for VolumeTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VolumeTrend::StrongUptrend => write!(f, "Strong Uptrend"),
            VolumeTrend::WeakUptrend => write!(f, "Weak Uptrend"),
            VolumeTrend::StrongDowntrend => write!(f, "Strong Downtrend"),
            VolumeTrend::WeakDowntrend => write!(f, "Weak Downtrend"),
            VolumeTrend::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Where the latest close sits relative to the previous bar's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    NearSupport,
    NearResistance,
    MiddleZone,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::NearSupport => write!(f, "Near Support"),
            Zone::NearResistance => write!(f, "Near Resistance"),
            Zone::MiddleZone => write!(f, "Middle Zone"),
        }
    }
}

/// Directional bias read from option open-interest changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionBias {
    CallBias,
    PutBias,
    Neutral,
}

impl std::fmt::Display for OptionBias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionBias::CallBias => write!(f, "CALL Bias"),
            OptionBias::PutBias => write!(f, "PUT Bias"),
            OptionBias::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Outcome of the option-chain detector.
///
/// Keeps "computed Neutral" apart from "fetch failed, defaulted to Neutral".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BiasReading {
    Computed(OptionBias),
    Unavailable { reason: String },
}

impl BiasReading {
    /// The label used for scoring; failures degrade to `Neutral`.
    pub fn label(&self) -> OptionBias {
        match self {
            BiasReading::Computed(bias) => *bias,
            BiasReading::Unavailable { .. } => OptionBias::Neutral,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, BiasReading::Computed(_))
    }
}

/// The four detector outputs a suggestion is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reasoning {
    pub candle: CandlePattern,
    pub volume_trend: VolumeTrend,
    pub zone: Zone,
    pub option_bias: BiasReading,
}

/// Points awarded to each side. Each detector adds at most one point to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub call: u8,
    pub put: u8,
}

/// Final directional suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suggestion {
    BuyCall,
    BuyPut,
    Neutral,
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suggestion::BuyCall => write!(f, "BUY CALL"),
            Suggestion::BuyPut => write!(f, "BUY PUT"),
            Suggestion::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// One cycle's result, handed straight to delivery and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub suggestion: Suggestion,
    pub score: Score,
    pub reasoning: Reasoning,
    pub generated_at: DateTime<Local>,
}

/// Open-interest figures for one side of one strike.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionLeg {
    pub open_interest: f64,
    pub change_in_open_interest: f64,
}

/// One row of an option chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeRow {
    pub strike_price: f64,
    pub call: Option<OptionLeg>,
    pub put: Option<OptionLeg>,
}

/// Option chain snapshot for an index, rows in provider order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptionChain {
    pub symbol: String,
    pub rows: Vec<StrikeRow>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bar(minute: u32, close: f64) -> Bar {
        Bar {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 2, 9, minute, 0).unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1.0,
        }
    }

    #[test]
    fn series_rejects_fewer_than_three_bars() {
        for n in 0..3u32 {
            let bars = (0..n).map(|i| bar(15 + i * 5, 100.0)).collect();
            let err = Series::new(bars).unwrap_err();
            assert!(err.is_insufficient_data(), "n={n}: {err}");
        }
    }

    #[test]
    fn series_rejects_duplicate_timestamps() {
        let bars = vec![bar(15, 1.0), bar(20, 2.0), bar(20, 3.0)];
        assert!(matches!(Series::new(bars), Err(Error::InvalidSeries(_))));
    }

    #[test]
    fn series_exposes_latest_and_previous() {
        let series = Series::new(vec![bar(15, 1.0), bar(20, 2.0), bar(25, 3.0)]).unwrap();
        assert_eq!(series.latest().close, 3.0);
        assert_eq!(series.previous().close, 2.0);
        assert_eq!(series.closes(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn unavailable_bias_degrades_to_neutral() {
        let reading = BiasReading::Unavailable { reason: "timeout".into() };
        assert_eq!(reading.label(), OptionBias::Neutral);
        assert!(!reading.is_available());
        assert!(BiasReading::Computed(OptionBias::Neutral).is_available());
    }

    #[test]
    fn labels_render_human_readable() {
        assert_eq!(CandlePattern::BullishEngulfing.to_string(), "Bullish Engulfing");
        assert_eq!(VolumeTrend::WeakDowntrend.to_string(), "Weak Downtrend");
        assert_eq!(Zone::NearResistance.to_string(), "Near Resistance");
        assert_eq!(OptionBias::CallBias.to_string(), "CALL Bias");
        assert_eq!(Suggestion::BuyPut.to_string(), "BUY PUT");
    }
}
