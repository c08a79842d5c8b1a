pub mod lifecycle;
pub mod providers;
pub mod report;

pub use lifecycle::{Cycle, CycleSettings, CycleStats, SignalLoop};
pub use providers::{NseClient, YahooClient};
pub use report::format_report;
