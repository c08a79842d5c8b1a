use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use common::{Bar, Error, MarketDataProvider, Result, Series};

const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Intraday bars from the Yahoo Finance chart API.
pub struct YahooClient {
    http: Client,
    base_url: String,
}

impl YahooClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self { http, base_url: base_url.into() })
    }
}

#[async_trait]
impl MarketDataProvider for YahooClient {
    async fn fetch_series(&self, ticker: &str, range: &str, interval: &str) -> Result<Series> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={range}&interval={interval}&includePrePost=false",
            self.base_url,
            ticker.replace('^', "%5E"),
        );
        debug!(%url, "Fetching chart data");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;
        if !status.is_success() {
            return Err(Error::Provider(format!("HTTP {status}: {body}")));
        }

        let bars = parse_chart(&body)?;
        debug!(ticker, bars = bars.len(), "Chart data parsed");
        Series::new(bars)
    }
}

/// Parse a chart response into bars, skipping rows with missing prices.
pub fn parse_chart(body: &str) -> Result<Vec<Bar>> {
    let resp: ChartResponse = serde_json::from_str(body)?;

    if let Some(err) = resp.chart.error {
        return Err(Error::Provider(format!("{}: {}", err.code, err.description)));
    }

    let Some(result) = resp.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(Vec::new());
    };
    let timestamps = result.timestamp.unwrap_or_default();
    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Ok(Vec::new());
    };

    let bars = timestamps
        .iter()
        .enumerate()
        .filter_map(|(i, &ts)| {
            let open = value_at(&quote.open, i)?;
            let high = value_at(&quote.high, i)?;
            let low = value_at(&quote.low, i)?;
            let close = value_at(&quote.close, i)?;
            if close <= 0.0 {
                return None;
            }
            Some(Bar {
                timestamp: Utc.timestamp_opt(ts, 0).single()?,
                open,
                high,
                low,
                close,
                volume: value_at(&quote.volume, i).unwrap_or(0.0),
            })
        })
        .collect();

    Ok(bars)
}

fn value_at(column: &Option<Vec<Option<f64>>>, i: usize) -> Option<f64> {
    column.as_ref()?.get(i).copied().flatten()
}

// ─── Response types ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Deserialize)]
struct Indicators {
    quote: Vec<Quote>,
}

#[derive(Deserialize)]
struct Quote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<f64>>>,
}
