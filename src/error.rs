//! Error taxonomy for catalog fetches.
//!
//! The adapter never recovers from any of these; it surfaces one
//! [`FetchFailed`] upward with enough context (operation, page) for the
//! controller to decide whether its state is salvageable. Retry policy lives
//! with the caller.

use thiserror::Error;

/// Which adapter operation was being attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOp {
    /// Plain catalog listing (`GET /events`).
    List,
    /// Full-text/filter search (`GET /events/search`).
    Search,
    /// Single event lookup (`GET /events/{id}`).
    Details,
}

impl std::fmt::Display for FetchOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::List => "catalog listing",
            Self::Search => "catalog search",
            Self::Details => "event details",
        })
    }
}

/// Why a fetch failed.
#[derive(Debug, Error)]
pub enum FetchErrorKind {
    /// Network unreachable, connection reset, or transport-level timeout.
    #[error("transport: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Server(u16),
    /// The response body did not match the expected envelope shape.
    #[error("payload decode: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchErrorKind {
    /// Classify a reqwest error into transport vs. decode.
    ///
    /// Status errors never reach here; the adapter checks the status itself
    /// so it can report the code.
    pub fn classify(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err)
        } else {
            Self::Transport(err)
        }
    }
}

/// A single failed fetch attempt, scoped to that attempt only.
#[derive(Debug, Error)]
#[error("{op} request for page {page} failed: {kind}")]
pub struct FetchFailed {
    /// Operation that was attempted.
    pub op: FetchOp,
    /// 1-based page the request targeted (1 for detail lookups).
    pub page: u32,
    /// Underlying failure class.
    pub kind: FetchErrorKind,
}

impl FetchFailed {
    /// Build a failure record for `op` at `page`.
    pub const fn new(op: FetchOp, page: u32, kind: FetchErrorKind) -> Self {
        Self { op, page, kind }
    }
}
