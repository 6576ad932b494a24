//! Async session runtime wiring the pagination controller to the network.

mod runtime;

pub use runtime::{CatalogSession, FeedSnapshot, SessionCommand};
