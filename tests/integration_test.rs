//! Live market-data tests.
//!
//! These tests call the real provider and require network access.
//! Run with: `cargo test --features integration-tests`

#![cfg(feature = "integration-tests")]

use glance::config::ProviderConfig;
use glance::fetcher::{FetchError, QuoteProvider, YahooProvider, fetch_recent_closes};
use glance::models::INSTRUMENTS;
use glance::tls::build_tls_config;

fn provider() -> YahooProvider {
    YahooProvider::new(
        &ProviderConfig::default(),
        build_tls_config().expect("failed to build TLS config"),
    )
    .expect("failed to build provider")
}

#[tokio::test]
async fn test_fetch_index_closes() {
    let closes = provider()
        .recent_closes("^NSEI")
        .await
        .expect("failed to fetch ^NSEI");

    assert!(closes.len() >= 2, "expected a few daily closes, got {closes:?}");
    assert!(closes.iter().all(|c| c.is_sign_positive()));
}

#[tokio::test]
async fn test_every_configured_instrument_resolves() {
    let provider = provider();
    for instrument in INSTRUMENTS {
        let result = fetch_recent_closes(&provider, instrument.symbol_id).await;
        assert!(
            result.is_ok() || matches!(result, Err(FetchError::NoData { .. })),
            "{instrument}: {result:?}"
        );
    }
}

#[tokio::test]
async fn test_unknown_symbol_is_failure() {
    let result = fetch_recent_closes(&provider(), "NOT-A-REAL-SYMBOL.NS").await;
    assert!(matches!(result, Err(FetchError::Failure(_))));
}
