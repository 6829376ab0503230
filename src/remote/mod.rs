//! Remote fetching of JSON Web Key Sets
//!
//! The crate never opens a connection itself. Callers hand in an
//! [`HttpClient`] and get back a parsed [`JwkSet`], which then resolves keys
//! synchronously during verification.

mod http;

pub use http::{FetchFuture, HttpClient};

use crate::error::{Error, Result};
use crate::jwks::JwkSet;

/// Fetch and parse a JWKS document from the given URI using the provided HTTP client
///
/// # Errors
///
/// Returns `Error::RemoteError` with component-prefixed messages:
/// - `"jwks: ..."` for JWKS-specific errors
/// - whatever the client reports for network errors
///
/// # Example
///
/// ```ignore
/// let jwk_set = fetch_jwks(&client, "https://auth.example.com/.well-known/jwks.json").await?;
/// let key = jwk_set.resolve("key-id", AlgorithmId::RS256)?;
/// ```
pub async fn fetch_jwks(client: &(impl HttpClient + ?Sized), jwks_uri: &str) -> Result<JwkSet> {
    if jwks_uri.trim().is_empty() {
        return Err(Error::RemoteError("jwks: empty jwks_uri".to_string()));
    }

    let bytes = client.fetch(jwks_uri).await?;
    tracing::debug!(jwks_uri, bytes = bytes.len(), "fetched jwks document");

    let body = std::str::from_utf8(&bytes)
        .map_err(|e| Error::RemoteError(format!("jwks: utf8 decode failed: {e}")))?;

    serde_json::from_str(body)
        .map_err(|e| Error::RemoteError(format!("jwks: invalid jwks json: {e}")))
}
