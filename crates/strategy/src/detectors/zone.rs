use common::{Bar, Zone};

/// Place the latest close relative to the previous bar's low (support) and
/// high (resistance). Support is checked first.
pub fn check_support_resistance(latest: &Bar, prev: &Bar, tolerance: f64) -> Zone {
    let close = latest.close;
    if (close - prev.low).abs() / close < tolerance {
        Zone::NearSupport
    } else if (close - prev.high).abs() / close < tolerance {
        Zone::NearResistance
    } else {
        Zone::MiddleZone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn bar(high: f64, low: f64, close: f64) -> Bar {
        Bar { timestamp: Utc::now(), open: close, high, low, close, volume: 1.0 }
    }

    #[test]
    fn near_support() {
        let prev = bar(104.0, 100.0, 102.0);
        assert_eq!(check_support_resistance(&bar(101.0, 99.0, 100.1), &prev, 0.002), Zone::NearSupport);
    }

    #[test]
    fn near_resistance() {
        let prev = bar(104.0, 100.0, 102.0);
        assert_eq!(check_support_resistance(&bar(105.0, 103.0, 103.9), &prev, 0.002), Zone::NearResistance);
    }

    #[test]
    fn middle_zone() {
        let prev = bar(104.0, 100.0, 102.0);
        assert_eq!(check_support_resistance(&bar(106.0, 99.0, 105.0), &prev, 0.002), Zone::MiddleZone);
    }

    #[test]
    fn support_wins_when_both_match() {
        // Narrow previous range: close is within tolerance of both ends.
        let prev = bar(100.1, 100.0, 100.05);
        assert_eq!(check_support_resistance(&bar(100.1, 100.0, 100.05), &prev, 0.002), Zone::NearSupport);
    }

    #[test]
    fn zero_close_does_not_panic() {
        let prev = bar(1.0, 0.5, 0.7);
        assert_eq!(check_support_resistance(&bar(0.0, 0.0, 0.0), &prev, 0.002), Zone::MiddleZone);
    }
}
