use common::{Bar, CandlePattern};

/// Classify the latest bar against the previous one.
///
/// Engulfing patterns are checked before doji; the result is always one of
/// the four variants.
pub fn detect_candle(latest: &Bar, prev: &Bar, doji_body_ratio: f64) -> CandlePattern {
    let latest_up = latest.close > latest.open;
    let latest_down = latest.close < latest.open;
    let prev_up = prev.close > prev.open;
    let prev_down = prev.close < prev.open;

    if latest_up && prev_down && latest.open < prev.close && latest.close > prev.open {
        return CandlePattern::BullishEngulfing;
    }
    if latest_down && prev_up && latest.open > prev.close && latest.close < prev.open {
        return CandlePattern::BearishEngulfing;
    }

    let body = (latest.close - latest.open).abs();
    let range = latest.high - latest.low;
    if body < range * doji_body_ratio {
        CandlePattern::Doji
    } else {
        CandlePattern::NoPattern
    }
}
