//! Single event lookup.

use crate::config::ApiConfig;
use crate::error::{FetchFailed, FetchOp};
use crate::state::Event;

use super::wire::DetailEnvelope;

/// What: Fetch one event by its opaque id.
///
/// Inputs:
/// - `client`: Shared HTTP client
/// - `config`: Deployment configuration holding the base URL
/// - `id`: Opaque event identifier
///
/// Output:
/// - `Ok(Event)` unwrapped from the `{ event }` envelope; `Err(FetchFailed)`
///   otherwise.
///
/// # Errors
/// Returns [`FetchFailed`] tagged with [`FetchOp::Details`]; the page field
/// is fixed at 1 since detail lookups are not paginated.
pub async fn fetch_event(
    client: &reqwest::Client,
    config: &ApiConfig,
    id: &str,
) -> Result<Event, FetchFailed> {
    let url = super::endpoint(&config.base_url, &format!("events/{id}"));
    let env: DetailEnvelope = super::get_json(client, &url, &[], FetchOp::Details, 1).await?;
    Ok(env.event)
}
