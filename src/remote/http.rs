//! HTTP client for remote fetching

use crate::error::Result;
use std::future::Future;
use std::pin::Pin;

/// Future returned by [`HttpClient::fetch`]
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>>;

/// HTTP client for fetching remote resources
///
/// Implement this with the HTTP library of your choice; the crate ships none.
/// `fetch` performs a GET and resolves to the response body.
///
/// # Errors
///
/// Error messages should follow the pattern: `"component: error description"`
/// (e.g., `"network: connection failed"`, `"http: status 404"`), reported as
/// [`Error::RemoteError`](crate::Error::RemoteError).
pub trait HttpClient: Send + Sync {
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a>;
}

impl<F, Fut> HttpClient for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<u8>>> + Send + 'static,
{
    fn fetch<'a>(&'a self, url: &'a str) -> FetchFuture<'a> {
        Box::pin(self(url.to_string()))
    }
}
