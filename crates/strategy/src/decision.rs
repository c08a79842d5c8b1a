use chrono::{DateTime, Local};
use tracing::{debug, info};

use common::{BiasReading, Reasoning, Series, Signal};

use crate::config::SignalParams;
use crate::detectors::{check_support_resistance, detect_candle, interpret_volume_trend};
use crate::indicators::IndicatorSet;
use crate::scoring::{decide, tally};

/// Turns one fetched series plus an option-chain reading into a [`Signal`].
///
/// Holds only configuration; every call is independent of the previous one.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    params: SignalParams,
}

impl DecisionEngine {
    pub fn new(params: SignalParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SignalParams {
        &self.params
    }

    /// Run the detectors on the last two bars and score them.
    ///
    /// Indicators are computed and logged but do not feed the score.
    pub fn evaluate(&self, series: &Series, option_bias: BiasReading, generated_at: DateTime<Local>) -> Signal {
        let indicators = IndicatorSet::compute(series, &self.params);
        if let Some(snap) = indicators.latest() {
            debug!(
                ema_fast = snap.ema_fast,
                ema_slow = snap.ema_slow,
                rsi = ?snap.rsi,
                volume_ma = ?snap.volume_ma,
                "Latest indicators"
            );
        }

        let reasoning = self.reason(series, option_bias);
        let score = tally(&reasoning);
        let suggestion = decide(score, self.params.min_score);

        info!(
            candle = %reasoning.candle,
            volume_trend = %reasoning.volume_trend,
            zone = %reasoning.zone,
            option_bias = %reasoning.option_bias.label(),
            call_score = score.call,
            put_score = score.put,
            suggestion = %suggestion,
            "Signal evaluated"
        );

        Signal { suggestion, score, reasoning, generated_at }
    }

    /// Detector labels for the latest bar.
    pub fn reason(&self, series: &Series, option_bias: BiasReading) -> Reasoning {
        let latest = series.latest();
        let prev = series.previous();
        Reasoning {
            candle: detect_candle(latest, prev, self.params.doji_body_ratio),
            volume_trend: interpret_volume_trend(latest, prev),
            zone: check_support_resistance(latest, prev, self.params.zone_tolerance),
            option_bias,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use common::{Bar, CandlePattern, OptionBias, Score, Suggestion, VolumeTrend, Zone};

    fn bar(i: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Bar {
        Bar {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 2, 9, 15, 0).unwrap() + Duration::minutes(5 * i),
            open,
            high,
            low,
            close,
            volume,
        }
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 2, 10, 30, 0).unwrap()
    }

    #[test]
    fn bullish_scenario_buys_call() {
        let series = Series::new(vec![
            bar(0, 102.0, 103.0, 101.0, 102.5, 700.0),
            bar(1, 103.0, 104.0, 100.0, 101.0, 800.0),
            bar(2, 100.0, 106.0, 99.0, 105.0, 1000.0),
        ])
        .unwrap();

        let signal = DecisionEngine::default().evaluate(&series, BiasReading::Computed(OptionBias::CallBias), now());

        assert_eq!(signal.reasoning.candle, CandlePattern::BullishEngulfing);
        assert_eq!(signal.reasoning.volume_trend, VolumeTrend::StrongUptrend);
        assert_eq!(signal.reasoning.zone, Zone::MiddleZone);
        assert_eq!(signal.score, Score { call: 3, put: 0 });
        assert_eq!(signal.suggestion, Suggestion::BuyCall);
        assert_eq!(signal.generated_at, now());
    }

    #[test]
    fn evenly_split_scenario_is_neutral() {
        // Strong downtrend (+put) against a call bias (+call).
        let series = Series::new(vec![
            bar(0, 100.0, 101.0, 99.0, 100.0, 500.0),
            bar(1, 100.0, 103.0, 99.0, 102.0, 800.0),
            bar(2, 101.5, 104.0, 98.0, 99.5, 900.0),
        ])
        .unwrap();

        let signal = DecisionEngine::default().evaluate(&series, BiasReading::Computed(OptionBias::CallBias), now());

        assert_eq!(signal.score, Score { call: 1, put: 1 });
        assert_eq!(signal.suggestion, Suggestion::Neutral);
    }

    #[test]
    fn failed_option_chain_still_produces_signal() {
        let series = Series::new(vec![
            bar(0, 105.0, 106.0, 104.0, 104.5, 500.0),
            bar(1, 101.0, 104.0, 100.0, 103.0, 800.0),
            bar(2, 104.0, 105.0, 98.0, 99.0, 1200.0),
        ])
        .unwrap();

        let reading = BiasReading::Unavailable { reason: "malformed JSON".into() };
        let signal = DecisionEngine::default().evaluate(&series, reading, now());

        assert_eq!(signal.reasoning.candle, CandlePattern::BearishEngulfing);
        assert_eq!(signal.reasoning.volume_trend, VolumeTrend::StrongDowntrend);
        assert_eq!(signal.reasoning.option_bias.label(), OptionBias::Neutral);
        assert_eq!(signal.suggestion, Suggestion::BuyPut);
    }

    #[test]
    fn stricter_min_score_holds_back() {
        let series = Series::new(vec![
            bar(0, 102.0, 103.0, 101.0, 102.5, 700.0),
            bar(1, 103.0, 104.0, 100.0, 101.0, 800.0),
            bar(2, 100.0, 106.0, 99.0, 105.0, 1000.0),
        ])
        .unwrap();
        let engine = DecisionEngine::new(SignalParams { min_score: 4, ..SignalParams::default() });

        let signal = engine.evaluate(&series, BiasReading::Computed(OptionBias::CallBias), now());

        assert_eq!(signal.suggestion, Suggestion::Neutral);
    }
}
