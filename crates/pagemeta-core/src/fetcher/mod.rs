//! HTTP page fetcher.
//!
//! Uses the curl crate (libcurl) to GET a page into memory. libcurl's own
//! redirect following is off: each hop is a separate easy transfer so the
//! hop budget from [`FetchConfig::max_redirects`] is enforced here and every
//! `Location` is checked to be http(s) before it is requested.

mod error;
mod parse;

pub use error::FetchError;

use crate::config::FetchConfig;
use crate::target::resolve_location;
use std::str;
use std::time::Duration;
use url::Url;

/// One response, fully buffered.
#[derive(Debug)]
struct Response {
    status: u32,
    location: Option<String>,
    body: Vec<u8>,
}

/// Fetches `url` and returns the body of the final 2xx response as text.
///
/// 3xx responses carrying `Location` are followed, up to
/// `config.max_redirects` hops. Bytes are decoded lossily as UTF-8; no
/// charset sniffing is done. Blocks the current thread; call from
/// `spawn_blocking` if used from async code.
pub fn fetch(url: &Url, config: &FetchConfig) -> Result<String, FetchError> {
    let mut current = url.clone();
    let mut hops = 0u32;

    loop {
        let response = get_once(&current, config).map_err(|source| FetchError::Network {
            url: current.to_string(),
            source,
        })?;
        tracing::debug!(
            url = %current,
            status = response.status,
            bytes = response.body.len(),
            "GET complete"
        );

        match (response.status, response.location) {
            (200..=299, _) => return Ok(String::from_utf8_lossy(&response.body).into_owned()),
            (300..=399, Some(location)) => {
                if hops >= config.max_redirects {
                    return Err(FetchError::TooManyRedirects {
                        url: url.to_string(),
                        limit: config.max_redirects,
                    });
                }
                let next = resolve_location(&current, &location).map_err(|source| {
                    FetchError::InvalidRedirect {
                        location: location.clone(),
                        source,
                    }
                })?;
                tracing::info!(from = %current, to = %next, status = response.status, "following redirect");
                hops += 1;
                current = next;
            }
            (status, _) => {
                return Err(FetchError::HttpStatus {
                    url: current.to_string(),
                    status,
                })
            }
        }
    }
}

/// Performs a single GET without following redirects.
fn get_once(url: &Url, config: &FetchConfig) -> Result<Response, curl::Error> {
    let mut headers: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.get(true)?;
    easy.follow_location(false)?;
    // Empty string stops libcurl from reading http_proxy / ALL_PROXY from the environment.
    easy.proxy("")?;
    if let Some(secs) = config.connect_timeout_secs {
        easy.connect_timeout(Duration::from_secs(secs))?;
    }
    if let Some(secs) = config.timeout_secs {
        easy.timeout(Duration::from_secs(secs))?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                headers.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let head = parse::parse_headers(&headers);
    let status = match easy.response_code()? {
        0 => head.status.unwrap_or(0),
        code => code,
    };

    Ok(Response {
        status,
        location: head.location,
        body,
    })
}
