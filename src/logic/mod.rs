//! Pure decision logic: the pagination state machine, result projection, and
//! the input debouncer.

pub mod debounce;
pub mod pagination;
pub mod projection;

pub use pagination::PaginationController;
pub use projection::{ListProjection, project};
