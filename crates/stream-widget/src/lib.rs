//! Twitch stream widget core.
//!
//! Fetches live streams, the top-games catalog, and broadcaster
//! profiles from the Helix API, normalizes them into cacheable
//! records, and serves them through a TTL cache so repeated widget
//! renders don't hammer the upstream API.
//!
//! Public pipeline operations are total: collaborator failures are
//! logged and reported as empty results, never as errors.

pub mod aggregator;
pub mod api;
pub mod cache_key;
pub mod catalog;
pub mod enricher;
pub mod options;
pub mod records;
pub mod store;

#[cfg(test)]
mod testing;

pub use aggregator::{StreamAggregator, flush_cache};
pub use api::{HelixApi, StreamingApi};
pub use catalog::GameCatalog;
pub use options::{SelectOption, WidgetOptions};
pub use records::{Game, Stream, User};
pub use store::{CacheStore, MemoryStore, SqliteStore, StoreError};
