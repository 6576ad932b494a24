//! Full-text and filter search fetcher.

use crate::config::ApiConfig;
use crate::error::{FetchFailed, FetchOp};
use crate::state::{PaginatedResult, QueryCriteria};

use super::wire::SearchEnvelope;

/// What: Search the catalog with every populated criteria field.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `config`: Deployment configuration holding the base URL
/// - `criteria`: Active filter snapshot
/// - `page`: 1-based page to fetch
/// - `limit`: Page size
///
/// Output:
/// - `Ok(PaginatedResult)` with true pagination metadata from the search
///   endpoint; `Err(FetchFailed)` otherwise.
///
/// Details:
/// - Only populated fields become query parameters; absent filters are left
///   off the request entirely rather than sent empty.
///
/// # Errors
/// Returns [`FetchFailed`] tagged with [`FetchOp::Search`] and the page.
pub async fn search_catalog(
    client: &reqwest::Client,
    config: &ApiConfig,
    criteria: &QueryCriteria,
    page: u32,
    limit: u32,
) -> Result<PaginatedResult, FetchFailed> {
    let url = super::endpoint(&config.base_url, "events/search");
    let params = search_params(criteria, page, limit);
    let env: SearchEnvelope = super::get_json(client, &url, &params, FetchOp::Search, page).await?;
    Ok(env.into())
}

/// Build the query parameter list for a search request.
fn search_params(criteria: &QueryCriteria, page: u32, limit: u32) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(7);
    if let Some(q) = criteria.free_text.as_deref()
        && !q.trim().is_empty()
    {
        params.push(("q", q.trim().to_string()));
    }
    if let Some(cat) = criteria.category.as_deref() {
        params.push(("category", cat.to_string()));
    }
    if let Some(loc) = criteria.location.as_deref()
        && !loc.trim().is_empty()
    {
        params.push(("location", loc.trim().to_string()));
    }
    if let Some(min) = criteria.min_price {
        params.push(("minPrice", min.to_string()));
    }
    if let Some(max) = criteria.max_price {
        params.push(("maxPrice", max.to_string()));
    }
    params.push(("page", page.to_string()));
    params.push(("limit", limit.to_string()));
    params
}

#[cfg(test)]
mod tests {
    use super::search_params;
    use crate::state::QueryCriteria;

    #[test]
    /// What: Only populated criteria fields become query parameters.
    ///
    /// - Input: Criteria with free text and a price range, nothing else
    /// - Output: q/minPrice/maxPrice/page/limit present; category and
    ///   location absent
    fn params_include_only_populated_fields() {
        let criteria = QueryCriteria {
            free_text: Some("concert".into()),
            ..QueryCriteria::default()
        }
        .with_price_range(10.0, 50.0);
        let params = search_params(&criteria, 2, 10);
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["q", "minPrice", "maxPrice", "page", "limit"]);
        assert!(params.contains(&("q", "concert".to_string())));
        assert!(params.contains(&("page", "2".to_string())));
    }

    #[test]
    /// What: Blank free text and location are dropped, not sent empty.
    ///
    /// - Input: Whitespace-only text fields plus a category
    /// - Output: Only category/page/limit parameters
    fn blank_text_fields_are_dropped() {
        let criteria = QueryCriteria {
            category: Some("Music".into()),
            free_text: Some("  ".into()),
            location: Some(String::new()),
            ..QueryCriteria::default()
        };
        let params = search_params(&criteria, 1, 10);
        let keys: Vec<&str> = params.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["category", "page", "limit"]);
    }
}
