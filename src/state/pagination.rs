//! Per-session pagination state owned by the pagination controller.

use super::types::Event;

/// Loading phase of the controller state machine.
///
/// At most one loading phase is active at any instant; the two loader flags
/// the presentation layer consumes are derived from this (see
/// [`crate::logic::projection`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in flight; load-more is accepted if pages remain.
    #[default]
    Idle,
    /// Page 1 for the current criteria is in flight.
    LoadingFirstPage,
    /// A page beyond the first is in flight.
    LoadingNextPage,
    /// The most recent fetch failed; accumulated data is preserved.
    Error,
}

impl Phase {
    /// Whether a fetch is currently outstanding.
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::LoadingFirstPage | Self::LoadingNextPage)
    }
}

/// Accumulated pagination state for one screen session.
///
/// Invariants maintained by the controller: `accumulated_events` is
/// append-only within a query lifetime and reset on criteria change;
/// `current_page` never exceeds `total_pages`; each page is fetched exactly
/// once per criteria, so the accumulated length is the sum of fetched page
/// sizes.
#[derive(Clone, Debug, Default)]
pub struct PaginationState {
    /// Events accumulated across pages for the current criteria, in arrival
    /// order.
    pub accumulated_events: Vec<Event>,
    /// 1-based page most recently applied (0 before any response).
    pub current_page: u32,
    /// Total pages reported by the latest applied response.
    pub total_pages: u32,
    /// Current phase of the state machine.
    pub phase: Phase,
}

impl PaginationState {
    /// Whether the first page of the current criteria is in flight.
    pub const fn is_loading_first_page(&self) -> bool {
        matches!(self.phase, Phase::LoadingFirstPage)
    }

    /// Whether a follow-up page is in flight.
    pub const fn is_loading_next_page(&self) -> bool {
        matches!(self.phase, Phase::LoadingNextPage)
    }

    /// Whether more pages remain to be fetched.
    pub const fn has_more_pages(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::{PaginationState, Phase};

    #[test]
    /// What: Fresh state is idle and empty with no pages known.
    ///
    /// - Input: `PaginationState::default()`
    /// - Output: Idle phase, no events, no more pages
    fn default_state_is_idle_and_empty() {
        let s = PaginationState::default();
        assert_eq!(s.phase, Phase::Idle);
        assert!(s.accumulated_events.is_empty());
        assert!(!s.has_more_pages());
        assert!(!s.is_loading_first_page());
        assert!(!s.is_loading_next_page());
    }

    #[test]
    /// What: The two loading flags are mutually exclusive by construction.
    ///
    /// - Input: Each phase in turn
    /// - Output: At most one flag true per phase
    fn loading_flags_mutually_exclusive() {
        for phase in [
            Phase::Idle,
            Phase::LoadingFirstPage,
            Phase::LoadingNextPage,
            Phase::Error,
        ] {
            let s = PaginationState {
                phase,
                ..PaginationState::default()
            };
            assert!(!(s.is_loading_first_page() && s.is_loading_next_page()));
            assert_eq!(phase.is_loading(), s.is_loading_first_page() || s.is_loading_next_page());
        }
    }
}
