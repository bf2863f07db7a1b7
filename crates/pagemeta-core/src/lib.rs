pub mod config;
pub mod logging;

pub mod extractor;
pub mod fetcher;
pub mod target;

pub use config::FetchConfig;
pub use extractor::{extract, PageMetadata};
pub use fetcher::{fetch, FetchError};
pub use target::{parse_target, TargetUrlError};

pub use url::Url;

/// Fetches `url` and extracts its title and description.
///
/// Blocking; see [`fetcher::fetch`].
pub fn fetch_metadata(url: &Url, config: &FetchConfig) -> Result<PageMetadata, FetchError> {
    let html = fetch(url, config)?;
    let meta = extract(&html);
    tracing::debug!(
        url = %url,
        has_title = meta.title.is_some(),
        has_description = meta.description.is_some(),
        "extracted page metadata"
    );
    Ok(meta)
}
