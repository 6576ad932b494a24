//! Library entry for eventfeed: the fetch, search, and pagination core of an
//! events-catalog client.
//!
//! The crate turns user intent (category toggles, debounced free-text input,
//! price/location filters, "load more" triggers) into correctly-sequenced API
//! requests and accumulates the results into a single snapshot stream the
//! presentation layer can render. Rendering itself is out of scope.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod logic;
pub mod sources;
pub mod state;
