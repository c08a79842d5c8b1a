/// RSI (Relative Strength Index) indicator.
///
/// Simple rolling means of gains and losses over `period` close-to-close
/// changes. The first bar has no prior close and contributes a zero change,
/// so values start at index `period - 1`.
#[derive(Debug, Clone)]
pub struct RsiIndicator {
    pub period: usize,
}

impl RsiIndicator {
    pub fn new(period: usize) -> Self {
        assert!(period >= 2, "RSI period must be >= 2");
        Self { period }
    }

    /// RSI for every bar (oldest first).
    ///
    /// `None` during warm-up and for windows with neither gains nor losses.
    /// A window with gains and no losses yields 100.
    pub fn series(&self, closes: &[f64]) -> Vec<Option<f64>> {
        let mut gains = vec![0.0; closes.len()];
        let mut losses = vec![0.0; closes.len()];
        for i in 1..closes.len() {
            let change = closes[i] - closes[i - 1];
            if change > 0.0 {
                gains[i] = change;
            } else if change < 0.0 {
                losses[i] = -change;
            }
        }

        let period = self.period as f64;
        (0..closes.len())
            .map(|i| {
                if i + 1 < self.period {
                    return None;
                }
                let window = i + 1 - self.period..=i;
                let avg_gain = gains[window.clone()].iter().sum::<f64>() / period;
                let avg_loss = losses[window].iter().sum::<f64>() / period;
                rsi_from_averages(avg_gain, avg_loss)
            })
            .collect()
    }

    /// RSI at the latest close.
    pub fn compute(&self, closes: &[f64]) -> Option<f64> {
        self.series(closes).last().copied().flatten()
    }
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        // RS is infinite (pure gains) or undefined (flat window)
        return (avg_gain > 0.0).then_some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}
