pub mod ema;
pub mod rsi;
pub mod volume;

pub use ema::EmaIndicator;
pub use rsi::RsiIndicator;
pub use volume::VolumeAverage;

use common::Series;

use crate::config::SignalParams;

/// Indicator columns aligned one-to-one with the bars of a [`Series`].
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    pub ema_fast: Vec<f64>,
    pub ema_slow: Vec<f64>,
    pub rsi: Vec<Option<f64>>,
    pub volume_ma: Vec<Option<f64>>,
}

/// Indicator values at a single bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorSnapshot {
    pub ema_fast: f64,
    pub ema_slow: f64,
    pub rsi: Option<f64>,
    pub volume_ma: Option<f64>,
}

impl IndicatorSet {
    pub fn compute(series: &Series, params: &SignalParams) -> Self {
        let closes = series.closes();
        Self {
            ema_fast: EmaIndicator::new(params.ema_fast_span).series(&closes),
            ema_slow: EmaIndicator::new(params.ema_slow_span).series(&closes),
            rsi: RsiIndicator::new(params.rsi_period).series(&closes),
            volume_ma: VolumeAverage::new(params.volume_window).series(&series.volumes()),
        }
    }

    pub fn len(&self) -> usize {
        self.ema_fast.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ema_fast.is_empty()
    }

    pub fn at(&self, index: usize) -> Option<IndicatorSnapshot> {
        Some(IndicatorSnapshot {
            ema_fast: *self.ema_fast.get(index)?,
            ema_slow: *self.ema_slow.get(index)?,
            rsi: *self.rsi.get(index)?,
            volume_ma: *self.volume_ma.get(index)?,
        })
    }

    pub fn latest(&self) -> Option<IndicatorSnapshot> {
        self.len().checked_sub(1).and_then(|i| self.at(i))
    }
}
