use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Not enough data to analyze: need {required} bars, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid series: {0}")]
    InvalidSeries(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the data-fetch failure class, which the loop reports
    /// separately from computation errors.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Error::InsufficientData { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
