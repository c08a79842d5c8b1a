pub mod config;
pub mod decision;
pub mod detectors;
pub mod indicators;
pub mod scoring;

pub use config::SignalParams;
pub use decision::DecisionEngine;
pub use indicators::{IndicatorSet, IndicatorSnapshot};
