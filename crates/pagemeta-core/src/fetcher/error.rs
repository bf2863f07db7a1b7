//! Fetch error type.

use crate::target::TargetUrlError;
use thiserror::Error;

/// Failure of a page fetch. Nothing is retried; the first failure is returned.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (connection refused, DNS, TLS, timeout, ...).
    #[error("GET {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Final response status was not 2xx (includes 3xx without `Location`).
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },
    /// `Location` header could not be turned into an http(s) URL.
    #[error("invalid redirect location {location:?}: {source}")]
    InvalidRedirect {
        location: String,
        #[source]
        source: TargetUrlError,
    },
    /// Redirect chain longer than the configured hop budget.
    #[error("GET {url}: more than {limit} redirects")]
    TooManyRedirects { url: String, limit: u32 },
}

impl FetchError {
    /// HTTP status code of the offending response, if the failure was a status error.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
