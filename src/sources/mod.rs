//! Network retrieval module split into submodules.
//!
//! Everything here is a thin, typed wrapper over the catalog HTTP API: it
//! translates controller intent into requests and normalizes the two
//! divergent response envelopes into one [`PaginatedResult`] shape. No
//! retries happen at this layer; retry policy belongs to the caller.

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{FetchErrorKind, FetchFailed, FetchOp};
use crate::state::{PaginatedResult, QueryCriteria};

mod catalog;
mod details;
mod search;
mod wire;

pub use catalog::fetch_catalog_page;
pub use details::fetch_event;
pub use search::search_catalog;

/// Fetch the page of the catalog that matches `criteria`.
///
/// Criteria with any populated free-text, location, or price field require
/// the search endpoint; category-only (or empty) criteria go through the
/// plain listing path, which itself detours through search when a category
/// is present (see [`fetch_catalog_page`]).
///
/// # Errors
/// Returns [`FetchFailed`] on transport failure, non-2xx status, or a
/// malformed payload.
pub async fn fetch_page(
    client: &reqwest::Client,
    config: &ApiConfig,
    criteria: &QueryCriteria,
    page: u32,
    limit: u32,
) -> Result<PaginatedResult, FetchFailed> {
    if criteria.needs_search_endpoint() {
        search_catalog(client, config, criteria, page, limit).await
    } else {
        fetch_catalog_page(client, config, page, limit, criteria.category.as_deref()).await
    }
}

/// Join the configured base URL with an endpoint path.
fn endpoint(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Perform one GET request and decode the JSON body into `T`.
///
/// Non-2xx statuses are reported as [`FetchErrorKind::Server`] with the
/// status code; send failures and body decode failures are classified by
/// [`FetchErrorKind::classify`].
async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    params: &[(&str, String)],
    op: FetchOp,
    page: u32,
) -> Result<T, FetchFailed> {
    let resp = client
        .get(url)
        .query(params)
        .send()
        .await
        .map_err(|e| FetchFailed::new(op, page, FetchErrorKind::classify(e)))?;
    let status = resp.status();
    tracing::debug!(%op, page, status = status.as_u16(), url, "catalog request completed");
    if !status.is_success() {
        return Err(FetchFailed::new(
            op,
            page,
            FetchErrorKind::Server(status.as_u16()),
        ));
    }
    resp.json::<T>()
        .await
        .map_err(|e| FetchFailed::new(op, page, FetchErrorKind::classify(e)))
}

#[cfg(test)]
mod tests {
    use super::endpoint;

    #[test]
    /// What: Endpoint join tolerates trailing and leading slashes.
    ///
    /// - Input: Base URLs with and without trailing slash
    /// - Output: Exactly one slash between base and path
    fn endpoint_join_normalizes_slashes() {
        assert_eq!(
            endpoint("https://api.example/v1/", "/events"),
            "https://api.example/v1/events"
        );
        assert_eq!(
            endpoint("https://api.example/v1", "events/search"),
            "https://api.example/v1/events/search"
        );
    }
}
