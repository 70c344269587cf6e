//! Shared test doubles: a scripted API and a set-recording store.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Duration;
use helix_client::{HelixError, RawGame, RawStream, RawUser, StreamQuery};

use crate::api::StreamingApi;
use crate::store::{CacheStore, MemoryStore, StoreError};

/// Scripted [`StreamingApi`] with call counters and failure toggles.
#[derive(Default)]
pub struct MockApi {
    games: Vec<RawGame>,
    streams: Vec<RawStream>,
    users: Vec<RawUser>,
    fail_games: bool,
    fail_streams: bool,
    fail_users: bool,
    games_calls: AtomicUsize,
    streams_calls: AtomicUsize,
    users_calls: AtomicUsize,
    last_user_ids: Mutex<Vec<String>>,
}

impl MockApi {
    pub fn with_games(mut self, games: Vec<RawGame>) -> Self {
        self.games = games;
        self
    }

    pub fn with_streams(mut self, streams: Vec<RawStream>) -> Self {
        self.streams = streams;
        self
    }

    pub fn with_users(mut self, users: Vec<RawUser>) -> Self {
        self.users = users;
        self
    }

    pub fn fail_games(mut self) -> Self {
        self.fail_games = true;
        self
    }

    pub fn fail_streams(mut self) -> Self {
        self.fail_streams = true;
        self
    }

    pub fn fail_users(mut self) -> Self {
        self.fail_users = true;
        self
    }

    pub fn games_calls(&self) -> usize {
        self.games_calls.load(Ordering::SeqCst)
    }

    pub fn streams_calls(&self) -> usize {
        self.streams_calls.load(Ordering::SeqCst)
    }

    pub fn users_calls(&self) -> usize {
        self.users_calls.load(Ordering::SeqCst)
    }

    /// The ids passed to the most recent `fetch_users` call.
    pub fn last_user_ids(&self) -> Vec<String> {
        self.last_user_ids.lock().unwrap().clone()
    }

    fn failure() -> HelixError {
        HelixError::ApiError {
            status: 500,
            message: "mock failure".into(),
        }
    }
}

impl StreamingApi for MockApi {
    async fn fetch_top_games(&self, _first: u32) -> Result<Vec<RawGame>, HelixError> {
        self.games_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_games {
            return Err(Self::failure());
        }
        Ok(self.games.clone())
    }

    async fn fetch_streams(&self, _query: &StreamQuery) -> Result<Vec<RawStream>, HelixError> {
        self.streams_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_streams {
            return Err(Self::failure());
        }
        Ok(self.streams.clone())
    }

    async fn fetch_users(&self, user_ids: &[String]) -> Result<Vec<RawUser>, HelixError> {
        self.users_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_user_ids.lock().unwrap() = user_ids.to_vec();
        if self.fail_users {
            return Err(Self::failure());
        }
        Ok(self.users.clone())
    }
}

/// [`MemoryStore`] wrapper that records every `set` call so tests can
/// assert on keys and TTLs.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    sets: std::sync::Arc<Mutex<Vec<(String, Duration)>>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_calls(&self) -> Vec<(String, Duration)> {
        self.sets.lock().unwrap().clone()
    }
}

impl CacheStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), StoreError> {
        self.sets.lock().unwrap().push((key.to_string(), ttl));
        self.inner.set(key, value, ttl)
    }

    fn delete_by_prefix(&self, prefix: &str) -> Result<(), StoreError> {
        self.inner.delete_by_prefix(prefix)
    }
}
