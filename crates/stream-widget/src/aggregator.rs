//! Stream aggregation pipeline.
//!
//! Orchestrates cache lookup, the Helix fetch, broadcaster
//! enrichment, and the cache write for stream queries. The cache
//! stores normalized record maps, never entities, so materialization
//! happens on every call, hit or miss.

use chrono::Duration;
use helix_client::StreamQuery;

use crate::api::StreamingApi;
use crate::cache_key::{self, CACHE_PREFIX, STREAMS_PREFIX};
use crate::enricher::resolve_users;
use crate::options::WidgetOptions;
use crate::records::{self, Stream, StreamRecord, StreamRecordMap};
use crate::store::CacheStore;

pub struct StreamAggregator<A, C> {
    api: A,
    store: C,
    options: WidgetOptions,
}

impl<A: StreamingApi, C: CacheStore> StreamAggregator<A, C> {
    pub fn new(api: A, store: C, options: WidgetOptions) -> Self {
        Self {
            api,
            store,
            options,
        }
    }

    /// Streams for the given query, from cache or the API.
    ///
    /// Total operation: a failed or empty upstream fetch yields an
    /// empty result (and no cache write) rather than an error, so
    /// transient upstream trouble renders as "no streams".
    pub async fn get(&self, query: &StreamQuery) -> Vec<Stream> {
        let key = cache_key::streams_key(query.params());

        if let Some(records) = self.read_cache(&key) {
            if !records.is_empty() {
                return records::build_streams(records);
            }
        }

        let raw_streams = match self.api.fetch_streams(query).await {
            Ok(streams) => streams,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch streams");
                Vec::new()
            }
        };

        let users = resolve_users(&self.api, &raw_streams).await;

        let mut records = StreamRecordMap::new();
        for raw in raw_streams {
            let record = StreamRecord::from_raw(raw, &users);
            // Duplicate ids collapse, later record wins.
            records.insert(record.id.clone(), record);
        }

        if !records.is_empty() {
            self.write_cache(&key, &records);
        }

        records::build_streams(records)
    }

    /// Drop every cached stream query. The game catalog and any other
    /// namespaced entries are untouched.
    pub fn invalidate_streams(&self) {
        if let Err(e) = self.store.delete_by_prefix(STREAMS_PREFIX) {
            tracing::warn!(error = %e, "Stream cache invalidation failed");
        } else {
            tracing::info!("Stream cache invalidated");
        }
    }

    fn read_cache(&self, key: &str) -> Option<StreamRecordMap> {
        let payload = match self.store.get(key) {
            Ok(payload) => payload?,
            Err(e) => {
                tracing::warn!(error = %e, "Stream cache read failed");
                return None;
            }
        };
        match serde_json::from_str(&payload) {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stream cache entry");
                None
            }
        }
    }

    fn write_cache(&self, key: &str, records: &StreamRecordMap) {
        let ttl = Duration::hours(self.options.cache_duration_hours());
        let payload = match serde_json::to_string(records) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize stream records");
                return;
            }
        };
        match self.store.set(key, &payload, ttl) {
            Ok(()) => {
                tracing::debug!(count = records.len(), ttl_hours = ttl.num_hours(), "Streams cached")
            }
            Err(e) => tracing::warn!(error = %e, "Stream cache write failed"),
        }
    }
}

/// Drop every cache entry this crate owns, streams and game catalog
/// alike.
pub fn flush_cache<C: CacheStore>(store: &C) {
    if let Err(e) = store.delete_by_prefix(CACHE_PREFIX) {
        tracing::warn!(error = %e, "Cache flush failed");
    } else {
        tracing::info!("Widget cache flushed");
    }
}
