use common::{Bar, VolumeTrend};

/// Combine close direction with volume direction. Any tie is `Neutral`.
pub fn interpret_volume_trend(latest: &Bar, prev: &Bar) -> VolumeTrend {
    let up = latest.close > prev.close;
    let down = latest.close < prev.close;
    let more = latest.volume > prev.volume;
    let less = latest.volume < prev.volume;

    match (up, down, more, less) {
        (true, _, true, _) => VolumeTrend::StrongUptrend,
        (true, _, _, true) => VolumeTrend::WeakUptrend,
        (_, true, true, _) => VolumeTrend::StrongDowntrend,
        (_, true, _, true) => VolumeTrend::WeakDowntrend,
        _ => VolumeTrend::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bar(close: f64, volume: f64) -> Bar {
        Bar { timestamp: Utc::now(), open: close, high: close, low: close, close, volume }
    }

    #[test]
    fn trend_table() {
        let prev = bar(100.0, 800.0);
        let cases = [
            (bar(101.0, 900.0), VolumeTrend::StrongUptrend),
            (bar(101.0, 700.0), VolumeTrend::WeakUptrend),
            (bar(99.0, 900.0), VolumeTrend::StrongDowntrend),
            (bar(99.0, 700.0), VolumeTrend::WeakDowntrend),
        ];
        for (latest, expected) in cases {
            assert_eq!(interpret_volume_trend(&latest, &prev), expected);
        }
    }

    #[test]
    fn ties_are_neutral() {
        let prev = bar(100.0, 800.0);
        assert_eq!(interpret_volume_trend(&bar(100.0, 900.0), &prev), VolumeTrend::Neutral);
        assert_eq!(interpret_volume_trend(&bar(101.0, 800.0), &prev), VolumeTrend::Neutral);
        assert_eq!(interpret_volume_trend(&bar(99.0, 800.0), &prev), VolumeTrend::Neutral);
    }
}
