//! TLS configuration for the market-data HTTP client.
//!
//! Builds a [`rustls::ClientConfig`] whose root store is the Mozilla CA set
//! shipped by `webpki-roots`, so the binary does not depend on the host's
//! certificate store.

use rustls::ClientConfig;

use crate::Result;

/// Builds a [`ClientConfig`] trusting the bundled web PKI roots.
///
/// # Errors
///
/// Returns [`GlanceError::Tls`](crate::GlanceError::Tls) if the root store
/// ends up empty.
pub fn build_tls_config() -> Result<ClientConfig> {
    let mut root_store = rustls::RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    if root_store.is_empty() {
        return Err(crate::GlanceError::Tls(
            "no trust anchors available for provider TLS".to_string(),
        ));
    }

    let config = ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Ok(config)
}
