//! Target URL validation.
//!
//! Only absolute `http` / `https` URLs are fetched. The same rule applies to
//! redirect targets, which may be relative to the URL that produced them.

use thiserror::Error;
use url::Url;

/// Why a string could not be used as a fetch target.
#[derive(Debug, Error)]
pub enum TargetUrlError {
    #[error("invalid URL {input:?}: {source}")]
    Malformed {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URL scheme {scheme:?} (expected http or https)")]
    UnsupportedScheme { scheme: String },
}

/// Parses `input` as an absolute http(s) URL.
///
/// # Examples
///
/// - `parse_target("https://example.com/")` → `Ok(..)`
/// - `parse_target("ftp://example.com/")` → `Err(UnsupportedScheme)`
/// - `parse_target("example.com")` → `Err(Malformed)` (no scheme)
pub fn parse_target(input: &str) -> Result<Url, TargetUrlError> {
    let url = Url::parse(input.trim()).map_err(|source| TargetUrlError::Malformed {
        input: input.to_string(),
        source,
    })?;
    check_scheme(url)
}

/// Resolves a `Location` header value against the URL of the response that sent it.
pub fn resolve_location(base: &Url, location: &str) -> Result<Url, TargetUrlError> {
    let url = base
        .join(location.trim())
        .map_err(|source| TargetUrlError::Malformed {
            input: location.to_string(),
            source,
        })?;
    check_scheme(url)
}

fn check_scheme(url: Url) -> Result<Url, TargetUrlError> {
    // Url lowercases the scheme while parsing.
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(TargetUrlError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}
