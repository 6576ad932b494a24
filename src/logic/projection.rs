//! Derived UI flags consumed by the presentation layer.

use crate::state::{PaginationState, Phase};

/// Flags the presentation layer renders alongside the accumulated list.
///
/// Pure derivation from [`PaginationState`], no independent state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListProjection {
    /// Show the "no events found" placeholder.
    pub is_empty: bool,
    /// Show the full-screen spinner (initial load for the current criteria).
    pub show_full_screen_loader: bool,
    /// Show the footer spinner under the list (loading a further page).
    pub show_footer_loader: bool,
}

/// Project the pagination state into its presentation flags.
#[must_use]
pub fn project(state: &PaginationState) -> ListProjection {
    ListProjection {
        is_empty: state.accumulated_events.is_empty() && state.phase != Phase::LoadingFirstPage,
        show_full_screen_loader: state.phase == Phase::LoadingFirstPage,
        show_footer_loader: state.phase == Phase::LoadingNextPage,
    }
}

#[cfg(test)]
mod tests {
    use super::project;
    use crate::state::{Event, PaginationState, Phase};

    fn one_event() -> Vec<Event> {
        vec![serde_json::from_str(r#"{"id": "e", "title": "t"}"#).expect("event")]
    }

    #[test]
    /// What: First-page loading shows the full-screen loader and is not
    /// "empty" even with no events yet.
    ///
    /// - Input: Empty accumulation in `LoadingFirstPage`
    /// - Output: Full-screen loader only
    fn first_page_load_is_not_empty() {
        let p = project(&PaginationState {
            phase: Phase::LoadingFirstPage,
            ..PaginationState::default()
        });
        assert!(p.show_full_screen_loader);
        assert!(!p.show_footer_loader);
        assert!(!p.is_empty);
    }

    #[test]
    /// What: Next-page loading shows only the footer loader.
    ///
    /// - Input: One accumulated event in `LoadingNextPage`
    /// - Output: Footer loader, not empty, no full-screen loader
    fn next_page_load_shows_footer() {
        let p = project(&PaginationState {
            accumulated_events: one_event(),
            phase: Phase::LoadingNextPage,
            ..PaginationState::default()
        });
        assert!(p.show_footer_loader);
        assert!(!p.show_full_screen_loader);
        assert!(!p.is_empty);
    }

    #[test]
    /// What: Idle with no events is the empty state; idle with events is not.
    ///
    /// - Input: Idle states with and without accumulated events
    /// - Output: `is_empty` reflects the accumulation
    fn idle_empty_state() {
        let empty = project(&PaginationState::default());
        assert!(empty.is_empty);
        let filled = project(&PaginationState {
            accumulated_events: one_event(),
            ..PaginationState::default()
        });
        assert!(!filled.is_empty);
    }

    #[test]
    /// What: A failed first fetch projects as the empty state so the error
    /// placeholder can render.
    ///
    /// - Input: `Error` phase with no accumulated events
    /// - Output: Empty, no loaders
    fn error_without_events_is_empty() {
        let p = project(&PaginationState {
            phase: Phase::Error,
            ..PaginationState::default()
        });
        assert!(p.is_empty);
        assert!(!p.show_full_screen_loader);
        assert!(!p.show_footer_loader);
    }
}
