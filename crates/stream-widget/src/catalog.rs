//! Game catalog: fetches, indexes, and caches the top-games list.
//!
//! The catalog is an independent pipeline from the stream cache, with
//! its own fixed key and a longer TTL. An empty or failed fetch is
//! deliberately not cached so the next call retries instead of pinning
//! a failure for a week.

use std::collections::BTreeMap;

use chrono::Duration;

use crate::api::StreamingApi;
use crate::cache_key;
use crate::options::SelectOption;
use crate::records::{Game, GameRecord, GameRecordMap};
use crate::store::CacheStore;

const CATALOG_TTL_DAYS: i64 = 7;
const CATALOG_PAGE_SIZE: u32 = 100;

pub struct GameCatalog<A, C> {
    api: A,
    store: C,
}

impl<A: StreamingApi, C: CacheStore> GameCatalog<A, C> {
    pub fn new(api: A, store: C) -> Self {
        Self { api, store }
    }

    /// The full id-indexed catalog, from cache or the API.
    ///
    /// Entries missing `id` or `name` are dropped. Returns `None` when
    /// no usable entries are available; that outcome is not cached.
    pub async fn get_all(&self) -> Option<BTreeMap<String, Game>> {
        Some(materialize(self.records().await?))
    }

    /// Look up a single game. Empty ids and unknown ids are `None`.
    ///
    /// Only the matched record is built into an entity; the rest of
    /// the catalog stays in its cached record shape.
    pub async fn get_by_id(&self, game_id: &str) -> Option<Game> {
        if game_id.is_empty() {
            return None;
        }
        self.records()
            .await?
            .remove(game_id)
            .map(Game::from_record)
    }

    /// The normalized catalog map, from cache or the API.
    async fn records(&self) -> Option<GameRecordMap> {
        let key = cache_key::games_key();

        if let Some(records) = self.read_cache(&key) {
            if !records.is_empty() {
                return Some(records);
            }
        }

        let raw_games = match self.api.fetch_top_games(CATALOG_PAGE_SIZE).await {
            Ok(games) => games,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch top games");
                return None;
            }
        };

        let mut records = GameRecordMap::new();
        for raw in raw_games {
            if let Some(record) = GameRecord::from_raw(raw) {
                records.insert(record.id.clone(), record);
            }
        }

        if records.is_empty() {
            return None;
        }

        self.write_cache(&key, &records);
        Some(records)
    }

    /// Catalog entries as select options, sorted by name behind a
    /// "please select" sentinel. When the catalog is unavailable the
    /// single option asks the user to connect the API first.
    pub async fn list_as_options(&self) -> Vec<SelectOption> {
        let Some(games) = self.get_all().await else {
            return vec![SelectOption::new("0", "Please connect to API first...")];
        };

        let mut games: Vec<Game> = games.into_values().collect();
        games.sort_by(|a, b| a.name.cmp(&b.name));

        let mut options = vec![SelectOption::new("0", "Please select...")];
        options.extend(games.into_iter().map(|g| SelectOption::new(g.id, g.name)));
        options
    }

    fn read_cache(&self, key: &str) -> Option<GameRecordMap> {
        let payload = match self.store.get(key) {
            Ok(payload) => payload?,
            Err(e) => {
                tracing::warn!(error = %e, "Game catalog cache read failed");
                return None;
            }
        };
        match serde_json::from_str(&payload) {
            Ok(records) => Some(records),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable game catalog cache entry");
                None
            }
        }
    }

    fn write_cache(&self, key: &str, records: &GameRecordMap) {
        let payload = match serde_json::to_string(records) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize game catalog");
                return;
            }
        };
        match self
            .store
            .set(key, &payload, Duration::days(CATALOG_TTL_DAYS))
        {
            Ok(()) => tracing::debug!(count = records.len(), "Game catalog cached"),
            Err(e) => tracing::warn!(error = %e, "Game catalog cache write failed"),
        }
    }
}

fn materialize(records: GameRecordMap) -> BTreeMap<String, Game> {
    records
        .into_iter()
        .map(|(id, record)| (id, Game::from_record(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockApi, RecordingStore};
    use helix_client::RawGame;

    fn game(id: &str, name: &str) -> RawGame {
        RawGame {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }

    #[tokio::test]
    async fn test_malformed_entries_dropped_and_result_cached() {
        let api = MockApi::default().with_games(vec![
            game("33214", "Fortnite"),
            RawGame {
                id: Some("bad".into()),
                name: None,
            },
        ]);
        let store = RecordingStore::new();
        let catalog = GameCatalog::new(api, store.clone());

        let games = catalog.get_all().await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games["33214"].name, "Fortnite");

        let sets = store.set_calls();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].0, cache_key::games_key());
        assert_eq!(sets[0].1, Duration::days(7));
    }

    #[tokio::test]
    async fn test_second_call_served_from_cache() {
        let api = MockApi::default().with_games(vec![game("1", "Apex")]);
        let catalog = GameCatalog::new(api, RecordingStore::new());

        let first = catalog.get_all().await.unwrap();
        let second = catalog.get_all().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(catalog.api.games_calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_fetch_not_cached_so_next_call_retries() {
        let api = MockApi::default();
        let catalog = GameCatalog::new(api, RecordingStore::new());

        assert!(catalog.get_all().await.is_none());
        assert!(catalog.get_all().await.is_none());
        // No cache entry was written, so both calls hit the API.
        assert_eq!(catalog.api.games_calls(), 2);
        assert!(catalog.store.set_calls().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_unavailable() {
        let api = MockApi::default().fail_games();
        let catalog = GameCatalog::new(api, RecordingStore::new());
        assert!(catalog.get_all().await.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let api = MockApi::default().with_games(vec![game("33214", "Fortnite")]);
        let catalog = GameCatalog::new(api, RecordingStore::new());

        assert_eq!(catalog.get_by_id("").await, None);
        // An empty id doesn't touch the API at all.
        assert_eq!(catalog.api.games_calls(), 0);

        assert_eq!(catalog.get_by_id("404").await, None);
        assert_eq!(catalog.get_by_id("33214").await.unwrap().name, "Fortnite");
        // The first real lookup populated the cache; the second was
        // answered from the cached record map.
        assert_eq!(catalog.api.games_calls(), 1);
    }

    #[tokio::test]
    async fn test_options_sorted_behind_sentinel() {
        let api = MockApi::default().with_games(vec![
            game("2", "Zelda"),
            game("1", "apex"),
            game("3", "Fortnite"),
        ]);
        let catalog = GameCatalog::new(api, RecordingStore::new());

        let options = catalog.list_as_options().await;
        assert_eq!(options[0], SelectOption::new("0", "Please select..."));
        // Case-sensitive lexical order: uppercase before lowercase.
        let labels: Vec<&str> = options[1..].iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Fortnite", "Zelda", "apex"]);
    }

    #[tokio::test]
    async fn test_options_when_unavailable() {
        let api = MockApi::default();
        let catalog = GameCatalog::new(api, RecordingStore::new());

        let options = catalog.list_as_options().await;
        assert_eq!(
            options,
            vec![SelectOption::new("0", "Please connect to API first...")]
        );
    }
}
