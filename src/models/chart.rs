//! Wire format of the Yahoo Finance `v8/finance/chart` endpoint.
//!
//! Only the fields needed to recover daily closes are modelled; everything
//! else in the payload is ignored.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;

use crate::GlanceError;

/// Top-level envelope.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

/// Either a result list or an error object; the provider sets one of them.
#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteIndicator>,
}

/// OHLCV columns. Bars without a trade carry `null`.
#[derive(Debug, Deserialize)]
pub struct QuoteIndicator {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartResponse {
    /// Extracts the close column in chronological order, skipping `null` bars.
    ///
    /// # Errors
    ///
    /// Returns [`GlanceError::MalformedResponse`] if the provider reported an
    /// error, returned no result, or sent a non-finite close.
    pub fn closes(self) -> crate::Result<Vec<Decimal>> {
        if let Some(err) = self.chart.error {
            return Err(GlanceError::MalformedResponse(format!(
                "provider error {}: {}",
                err.code, err.description
            )));
        }

        let result = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| {
                GlanceError::MalformedResponse("chart response has no result".to_string())
            })?;

        let Some(quote) = result.indicators.quote.into_iter().next() else {
            return Ok(Vec::new());
        };

        quote
            .close
            .into_iter()
            .flatten()
            .map(|close| {
                Decimal::from_f64(close).ok_or_else(|| {
                    GlanceError::MalformedResponse(format!("close {close} is not representable"))
                })
            })
            .collect()
    }
}
