//! Quote fetching from the market-data provider.
//!
//! [`fetch_recent_closes`] turns a provider's close series into the
//! `(latest, previous)` pair the processor needs, classifying short series as
//! [`FetchError::NoData`] and everything else that goes wrong as
//! [`FetchError::Failure`]. Nothing is retried here; the next tick is the retry.

use std::future::Future;

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::models::chart::ChartResponse;
use crate::{GlanceError, Result};

/// Daily bars requested per fetch. Wider than two so weekends and holidays
/// still leave two trading days in the window.
const CHART_RANGE: &str = "5d";

/// Bar width requested per fetch.
const CHART_INTERVAL: &str = "1d";

/// The provider rejects requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) market-glance/0.1";

/// Why no `(latest, previous)` pair is available for an instrument.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The provider answered but had fewer than two closes.
    #[error("provider returned {observations} close observation(s), need at least 2")]
    NoData { observations: usize },

    /// Transport, provider, or decoding failure.
    #[error(transparent)]
    Failure(#[from] GlanceError),
}

/// The two most recent closes of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentCloses {
    pub latest: Decimal,
    pub previous: Decimal,
}

/// Anything that can return an ordered (oldest first) close series for a symbol.
pub trait QuoteProvider {
    fn recent_closes(&self, symbol: &str) -> impl Future<Output = Result<Vec<Decimal>>> + Send;
}

/// Fetches the latest and previous close for `symbol`.
///
/// # Errors
///
/// Returns [`FetchError::NoData`] if fewer than two closes came back, or
/// [`FetchError::Failure`] if the provider call failed.
pub async fn fetch_recent_closes<P: QuoteProvider>(
    provider: &P,
    symbol: &str,
) -> std::result::Result<RecentCloses, FetchError> {
    let closes = provider.recent_closes(symbol).await?;
    debug!(symbol, observations = closes.len(), "received closes");

    match closes.as_slice() {
        [.., previous, latest] => Ok(RecentCloses {
            latest: *latest,
            previous: *previous,
        }),
        _ => Err(FetchError::NoData {
            observations: closes.len(),
        }),
    }
}

/// Yahoo Finance chart API client.
#[derive(Debug, Clone)]
pub struct YahooProvider {
    client: reqwest::Client,
    base_url: String,
}

impl YahooProvider {
    /// Builds a client using the given TLS roots and provider settings.
    ///
    /// # Errors
    ///
    /// Returns [`GlanceError::Tls`] if the HTTP client cannot be built.
    pub fn new(config: &ProviderConfig, tls_config: rustls::ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .use_preconfigured_tls(tls_config)
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| GlanceError::Tls(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn chart_url(&self, symbol: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, symbol)
    }
}

impl QuoteProvider for YahooProvider {
    async fn recent_closes(&self, symbol: &str) -> Result<Vec<Decimal>> {
        let response = self
            .client
            .get(self.chart_url(symbol))
            .query(&[("range", CHART_RANGE), ("interval", CHART_INTERVAL)])
            .send()
            .await?;

        let response = response.error_for_status()?;
        let body = response.bytes().await?;
        let chart: ChartResponse = serde_json::from_slice(&body)?;

        chart.closes()
    }
}
