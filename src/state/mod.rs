//! State module: value types and the per-session pagination state.

mod pagination;
mod types;

pub use pagination::{PaginationState, Phase};
pub use types::{Event, FetchTag, PaginatedResult, QueryCriteria};
