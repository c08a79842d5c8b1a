pub mod nse;
pub mod yahoo;

pub use nse::NseClient;
pub use yahoo::YahooClient;
