//! Binary configuration loaded from environment variables.
//!
//! These settings reach only the HTTP transport and the log sink; the refresh
//! core (session clock, processor, scheduler) reads no environment. Every
//! variable is optional:
//! - `GLANCE_PROVIDER_URL`: base URL of the market-data provider
//! - `GLANCE_HTTP_TIMEOUT_SECS`: per-request timeout in whole seconds
//! - `GLANCE_LOG_FILE`: where log output is appended
//!
//! The instrument table, session hours, and poll intervals are compiled in.

use std::path::PathBuf;
use std::time::Duration;

/// Default market-data endpoint.
const DEFAULT_PROVIDER_URL: &str = "https://query1.finance.yahoo.com";

/// Default per-request timeout.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Log file name used when `GLANCE_LOG_FILE` is not set.
const DEFAULT_LOG_FILE_NAME: &str = "market-glance.log";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub log_file: PathBuf,
}

/// Market-data provider settings.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROVIDER_URL.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`GlanceError::Config`](crate::GlanceError::Config) if
/// `GLANCE_HTTP_TIMEOUT_SECS` is not a positive integer.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let base_url = non_empty_var("GLANCE_PROVIDER_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string());

    let timeout = match non_empty_var("GLANCE_HTTP_TIMEOUT_SECS") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                return Err(crate::GlanceError::Config(format!(
                    "GLANCE_HTTP_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                )));
            }
        },
        None => DEFAULT_HTTP_TIMEOUT,
    };

    let log_file = non_empty_var("GLANCE_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE_NAME));

    Ok(AppConfig {
        provider: ProviderConfig { base_url, timeout },
        log_file,
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
