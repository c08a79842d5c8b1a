//! Independent feature detectors. Each reads only the latest and previous
//! bar (or an option-chain snapshot) and always yields a label.

pub mod candle;
pub mod option_chain;
pub mod volume;
pub mod zone;

pub use candle::detect_candle;
pub use option_chain::{option_bias, read_option_bias};
pub use volume::interpret_volume_trend;
pub use zone::check_support_resistance;
