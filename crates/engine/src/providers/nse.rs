use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use common::{Error, OptionChain, OptionChainProvider, OptionLeg, Result, StrikeRow};

const BASE_URL: &str = "https://www.nseindia.com";

/// NSE index option-chain client.
///
/// The API rejects requests without the session cookies set by the home
/// page, so every fetch primes the cookie store first.
pub struct NseClient {
    http: Client,
    base_url: String,
}

impl NseClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .use_rustls_tls()
            .cookie_store(true)
            .timeout(Duration::from_secs(15))
            .user_agent("Mozilla/5.0")
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self { http, base_url: base_url.into() })
    }
}

#[async_trait]
impl OptionChainProvider for NseClient {
    async fn fetch_chain(&self, symbol: &str) -> Result<OptionChain> {
        self.http
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let url = format!("{}/api/option-chain-indices?symbol={symbol}", self.base_url);
        debug!(%url, "Fetching option chain");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;
        if !status.is_success() {
            return Err(Error::Provider(format!("HTTP {status}")));
        }

        parse_option_chain(symbol, &body)
    }
}

/// Parse the `option-chain-indices` payload.
pub fn parse_option_chain(symbol: &str, body: &str) -> Result<OptionChain> {
    let resp: ChainResponse = serde_json::from_str(body)?;
    let rows = resp
        .records
        .data
        .into_iter()
        .map(|row| StrikeRow {
            strike_price: row.strike_price,
            call: row.ce.map(Into::into),
            put: row.pe.map(Into::into),
        })
        .collect();

    Ok(OptionChain { symbol: symbol.to_string(), rows })
}

// ─── Response types ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ChainResponse {
    records: Records,
}

#[derive(Deserialize)]
struct Records {
    data: Vec<ChainRow>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChainRow {
    #[serde(default)]
    strike_price: f64,
    #[serde(rename = "CE")]
    ce: Option<Leg>,
    #[serde(rename = "PE")]
    pe: Option<Leg>,
}

#[derive(Deserialize)]
struct Leg {
    #[serde(rename = "openInterest", default)]
    open_interest: f64,
    #[serde(rename = "changeinOpenInterest", default)]
    change_in_open_interest: f64,
}

impl From<Leg> for OptionLeg {
    fn from(leg: Leg) -> Self {
        OptionLeg {
            open_interest: leg.open_interest,
            change_in_open_interest: leg.change_in_open_interest,
        }
    }
}
