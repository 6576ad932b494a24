//! The pagination controller: a synchronous state machine over
//! [`PaginationState`].
//!
//! The controller never performs I/O. It decides which fetch to issue next
//! (returning a [`FetchTag`] for the caller to execute) and applies tagged
//! completions, discarding any response whose tag no longer matches the
//! request it is waiting for. The async runtime in [`crate::app`] drives it.

use crate::error::FetchFailed;
use crate::state::{FetchTag, PaginatedResult, PaginationState, Phase, QueryCriteria};

/// Orchestrates page-by-page fetch, accumulation, end-of-list detection, and
/// load-more backpressure for one screen session.
#[derive(Debug, Default)]
pub struct PaginationController {
    /// Criteria currently in effect.
    criteria: QueryCriteria,
    /// Accumulated pagination state, owned exclusively by this controller.
    state: PaginationState,
    /// Tag of the single outstanding request, if any.
    in_flight: Option<FetchTag>,
    /// Human-readable text of the most recent failure.
    last_error: Option<String>,
}

impl PaginationController {
    /// Fresh controller for a newly-mounted screen session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Adopt a new criteria snapshot and start a new search sequence.
    ///
    /// Inputs:
    /// - `criteria`: The new filter snapshot (also used on initial mount)
    ///
    /// Output:
    /// - The tag for the page-1 fetch the caller must now issue.
    ///
    /// Details:
    /// - Resets accumulation and pagination, enters `LoadingFirstPage`, and
    ///   replaces the in-flight tag, so a completion for any earlier request
    ///   fails the tag comparison in [`Self::apply`] and is discarded.
    pub fn set_criteria(&mut self, criteria: QueryCriteria) -> FetchTag {
        self.criteria = criteria.clone();
        self.state = PaginationState {
            current_page: 1,
            total_pages: 1,
            phase: Phase::LoadingFirstPage,
            ..PaginationState::default()
        };
        self.last_error = None;
        let tag = FetchTag { criteria, page: 1 };
        self.in_flight = Some(tag.clone());
        tracing::debug!(page = 1, "criteria changed, issuing first page fetch");
        tag
    }

    /// What: React to a "load more" trigger from the presentation layer.
    ///
    /// Output:
    /// - `Some(tag)` for the next-page fetch to issue, or `None` when the
    ///   trigger is a no-op.
    ///
    /// Details:
    /// - No-op while any fetch is outstanding and at the last known page;
    ///   this is the backpressure that keeps rapid scroll triggers from
    ///   issuing duplicate or overlapping page requests.
    /// - Accepted from the `Error` phase too, so a failed next-page fetch can
    ///   be re-attempted without changing criteria.
    pub fn load_more(&mut self) -> Option<FetchTag> {
        if self.in_flight.is_some() || self.state.phase.is_loading() {
            return None;
        }
        if !self.state.has_more_pages() {
            return None;
        }
        let page = self.state.current_page + 1;
        self.state.phase = Phase::LoadingNextPage;
        let tag = FetchTag {
            criteria: self.criteria.clone(),
            page,
        };
        self.in_flight = Some(tag.clone());
        tracing::debug!(page, "load more accepted");
        Some(tag)
    }

    /// What: Apply the outcome of a tagged fetch.
    ///
    /// Inputs:
    /// - `tag`: The tag the completed request was issued with
    /// - `outcome`: The normalized page or the failure
    ///
    /// Output:
    /// - `true` when the outcome was applied; `false` when it was stale and
    ///   discarded without touching any state.
    ///
    /// Details:
    /// - Page 1 replaces the accumulation; later pages append in server
    ///   order with no de-duplication by id (pages are disjoint by
    ///   contract).
    /// - Failures preserve accumulated events and enter `Error`.
    pub fn apply(
        &mut self,
        tag: &FetchTag,
        outcome: Result<PaginatedResult, FetchFailed>,
    ) -> bool {
        if self.in_flight.as_ref() != Some(tag) {
            tracing::debug!(page = tag.page, "discarding stale fetch result");
            return false;
        }
        self.in_flight = None;
        match outcome {
            Ok(result) => {
                if tag.page == 1 {
                    self.state.accumulated_events = result.events;
                } else {
                    self.state.accumulated_events.extend(result.events);
                }
                self.state.current_page = result.current_page;
                self.state.total_pages = result.total_pages;
                self.state.phase = Phase::Idle;
                self.last_error = None;
                tracing::debug!(
                    page = result.current_page,
                    total_pages = result.total_pages,
                    accumulated = self.state.accumulated_events.len(),
                    "page applied"
                );
            }
            Err(err) => {
                self.state.phase = Phase::Error;
                self.last_error = Some(err.to_string());
                tracing::warn!(page = tag.page, error = %err, "fetch failed");
            }
        }
        true
    }

    /// Criteria currently in effect.
    pub const fn criteria(&self) -> &QueryCriteria {
        &self.criteria
    }

    /// The accumulated pagination state.
    pub const fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Events accumulated so far for the current criteria.
    pub fn events(&self) -> &[crate::state::Event] {
        &self.state.accumulated_events
    }

    /// Text of the most recent failure, cleared by the next success or
    /// criteria change.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
