/// Exponential moving average with span-derived smoothing.
///
/// Uses the bias-adjusted form: each output is the weighted mean of all
/// values so far with weights `(1 - α)^age`, `α = 2 / (span + 1)`. The first
/// output equals the first input; there is no zero or SMA seed.
#[derive(Debug, Clone)]
pub struct EmaIndicator {
    pub span: usize,
}

impl EmaIndicator {
    pub fn new(span: usize) -> Self {
        assert!(span >= 1, "EMA span must be >= 1");
        Self { span }
    }

    pub fn alpha(&self) -> f64 {
        2.0 / (self.span as f64 + 1.0)
    }

    /// EMA for every position of `values` (oldest first). Same length as input.
    pub fn series(&self, values: &[f64]) -> Vec<f64> {
        let decay = 1.0 - self.alpha();
        let mut weighted_sum = 0.0;
        let mut weight_total = 0.0;

        values
            .iter()
            .map(|&v| {
                weighted_sum = v + decay * weighted_sum;
                weight_total = 1.0 + decay * weight_total;
                weighted_sum / weight_total
            })
            .collect()
    }

    /// EMA at the latest value, or `None` for empty input.
    pub fn compute(&self, values: &[f64]) -> Option<f64> {
        self.series(values).last().copied()
    }
}
