//! Response envelopes for the catalog API.
//!
//! The listing and search endpoints wrap the same event objects in two
//! different envelopes (`data` vs `events`); both carry the same pagination
//! block. These types exist only at the adapter boundary and convert into
//! [`PaginatedResult`] before anything leaves this module.

use serde::Deserialize;

use crate::state::{Event, PaginatedResult};

/// Pagination metadata block shared by both paginated envelopes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WirePagination {
    /// Total page count for the query.
    pub total_pages: u32,
    /// 1-based page this response covers.
    pub current_page: u32,
    /// Total matching events across all pages.
    #[serde(default)]
    pub total_events: u32,
}

/// `GET /events` envelope: `{ data, pagination }`.
#[derive(Debug, Deserialize)]
pub(super) struct ListEnvelope {
    /// Page-local events.
    pub data: Vec<Event>,
    /// Pagination metadata.
    pub pagination: WirePagination,
}

/// `GET /events/search` envelope: `{ events, pagination }`.
#[derive(Debug, Deserialize)]
pub(super) struct SearchEnvelope {
    /// Page-local events.
    pub events: Vec<Event>,
    /// Pagination metadata.
    pub pagination: WirePagination,
}

/// `GET /events/{id}` envelope: `{ event }`.
#[derive(Debug, Deserialize)]
pub(super) struct DetailEnvelope {
    /// The looked-up event.
    pub event: Event,
}

impl From<ListEnvelope> for PaginatedResult {
    fn from(env: ListEnvelope) -> Self {
        Self {
            events: env.data,
            total_pages: env.pagination.total_pages,
            current_page: env.pagination.current_page,
            total_events: env.pagination.total_events,
        }
    }
}

impl From<SearchEnvelope> for PaginatedResult {
    fn from(env: SearchEnvelope) -> Self {
        Self {
            events: env.events,
            total_pages: env.pagination.total_pages,
            current_page: env.pagination.current_page,
            total_events: env.pagination.total_events,
        }
    }
}
