//! Plain catalog listing fetcher.

use crate::config::ApiConfig;
use crate::error::{FetchFailed, FetchOp};
use crate::state::{Event, PaginatedResult};

use super::wire::{ListEnvelope, SearchEnvelope};

/// What: Fetch one page of the event catalog, optionally category-filtered.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `config`: Deployment configuration holding the base URL
/// - `page`: 1-based page to fetch
/// - `limit`: Page size
/// - `category`: Optional category filter
///
/// Output:
/// - `Ok(PaginatedResult)` with server pagination metadata; `Err(FetchFailed)`
///   on transport, status, or decode failure.
///
/// Details:
/// - The listing endpoint has no server-side category filter, so a category
///   routes through `GET /events/search` instead, and the result is
///   synthesized with `total_pages = 1` because the search endpoint reports
///   no true pagination metadata for category-only queries. This asymmetry
///   is part of the API contract and must be preserved, not fixed here.
///
/// # Errors
/// Returns [`FetchFailed`] tagged with [`FetchOp::List`] (or
/// [`FetchOp::Search`] on the category detour).
pub async fn fetch_catalog_page(
    client: &reqwest::Client,
    config: &ApiConfig,
    page: u32,
    limit: u32,
    category: Option<&str>,
) -> Result<PaginatedResult, FetchFailed> {
    if let Some(cat) = category {
        let url = super::endpoint(&config.base_url, "events/search");
        let params = vec![("category", cat.to_string())];
        let env: SearchEnvelope = super::get_json(client, &url, &params, FetchOp::Search, 1).await?;
        tracing::debug!(category = cat, count = env.events.len(), "category listing via search");
        return Ok(synthesize_category_result(env.events));
    }

    let url = super::endpoint(&config.base_url, "events");
    let params = vec![("page", page.to_string()), ("limit", limit.to_string())];
    let env: ListEnvelope = super::get_json(client, &url, &params, FetchOp::List, page).await?;
    Ok(env.into())
}

/// Wrap category-search events in a single synthetic page.
fn synthesize_category_result(events: Vec<Event>) -> PaginatedResult {
    let total = u32::try_from(events.len()).unwrap_or(u32::MAX);
    PaginatedResult {
        events,
        total_pages: 1,
        current_page: 1,
        total_events: total,
    }
}
