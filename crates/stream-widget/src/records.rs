//! Normalized records and domain entities.
//!
//! Raw Helix responses go through exactly one defaulting pass
//! ([`UserRecord::from_raw`], [`StreamRecord::from_raw`],
//! [`GameRecord::from_raw`]) into plain, JSON-serializable records —
//! the shape that lives in the cache. Records are then materialized
//! into domain entities on every read; the cache never holds entities.

use std::collections::{BTreeMap, HashMap};

use helix_client::{RawGame, RawStream, RawUser};
use serde::{Deserialize, Serialize};

/// Normalized map keyed by record id. Repeated ids collapse with
/// last-write-wins, matching upstream dedup semantics.
pub type StreamRecordMap = BTreeMap<String, StreamRecord>;
pub type GameRecordMap = BTreeMap<String, GameRecord>;

/// Cache shape of a broadcaster profile. Every field is defaulted
/// when absent upstream; absence is never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub broadcaster_type: String,
    pub description: String,
    pub profile_image_url: String,
    pub offline_image_url: String,
    pub view_count: u64,
}

impl UserRecord {
    /// Single defaulting pass from the raw API shape.
    pub fn from_raw(raw: RawUser) -> Self {
        Self {
            id: raw.id.unwrap_or_default(),
            login: raw.login.unwrap_or_default(),
            display_name: raw.display_name.unwrap_or_default(),
            user_type: raw.user_type.unwrap_or_default(),
            broadcaster_type: raw.broadcaster_type.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            profile_image_url: raw.profile_image_url.unwrap_or_default(),
            offline_image_url: raw.offline_image_url.unwrap_or_default(),
            view_count: raw.view_count.unwrap_or_default(),
        }
    }
}

/// Cache shape of a live stream. `user` is either the fully resolved
/// broadcaster record or `None`; the joining `user_id` is not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamRecord {
    pub id: String,
    pub game_id: String,
    pub community_ids: Vec<String>,
    #[serde(rename = "type")]
    pub stream_type: String,
    pub title: String,
    pub viewer_count: u64,
    pub started_at: String,
    pub language: String,
    pub thumbnail_url: String,
    pub user: Option<UserRecord>,
}

impl StreamRecord {
    /// Single defaulting pass from the raw API shape, joining the
    /// broadcaster profile by `user_id`. A missing or unmatched
    /// `user_id` leaves `user` as `None`.
    pub fn from_raw(raw: RawStream, users: &HashMap<String, UserRecord>) -> Self {
        let user = raw
            .user_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .and_then(|id| users.get(id))
            .cloned();
        Self {
            // A record with no id still gets indexed, under "0".
            id: raw.id.unwrap_or_else(|| "0".to_string()),
            game_id: raw.game_id.unwrap_or_else(|| "0".to_string()),
            community_ids: raw.community_ids.unwrap_or_default(),
            stream_type: raw.stream_type.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            viewer_count: raw.viewer_count.unwrap_or_default(),
            started_at: raw.started_at.unwrap_or_default(),
            language: raw.language.unwrap_or_default(),
            thumbnail_url: raw.thumbnail_url.unwrap_or_default(),
            user,
        }
    }
}

/// Cache shape of a catalog game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRecord {
    pub id: String,
    pub name: String,
}

impl GameRecord {
    /// Returns `None` when `id` or `name` is missing; malformed
    /// catalog entries are dropped rather than defaulted.
    pub fn from_raw(raw: RawGame) -> Option<Self> {
        Some(Self {
            id: raw.id?,
            name: raw.name?,
        })
    }
}

/// Broadcaster profile entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: String,
    pub login: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub broadcaster_type: String,
    pub description: String,
    pub profile_image_url: String,
    pub offline_image_url: String,
    pub view_count: u64,
}

impl User {
    pub fn from_record(rec: UserRecord) -> Self {
        Self {
            id: rec.id,
            login: rec.login,
            display_name: rec.display_name,
            user_type: rec.user_type,
            broadcaster_type: rec.broadcaster_type,
            description: rec.description,
            profile_image_url: rec.profile_image_url,
            offline_image_url: rec.offline_image_url,
            view_count: rec.view_count,
        }
    }
}

/// Live stream entity as consumed by widget rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stream {
    pub id: String,
    pub game_id: String,
    pub community_ids: Vec<String>,
    #[serde(rename = "type")]
    pub stream_type: String,
    pub title: String,
    pub viewer_count: u64,
    pub started_at: String,
    pub language: String,
    pub thumbnail_url: String,
    pub user: Option<User>,
}

impl Stream {
    pub fn from_record(rec: StreamRecord) -> Self {
        Self {
            id: rec.id,
            game_id: rec.game_id,
            community_ids: rec.community_ids,
            stream_type: rec.stream_type,
            title: rec.title,
            viewer_count: rec.viewer_count,
            started_at: rec.started_at,
            language: rec.language,
            thumbnail_url: rec.thumbnail_url,
            user: rec.user.map(User::from_record),
        }
    }
}

/// Catalog game entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: String,
    pub name: String,
}

impl Game {
    pub fn from_record(rec: GameRecord) -> Self {
        Self {
            id: rec.id,
            name: rec.name,
        }
    }
}

/// Materialize every record in a normalized map into entities.
pub fn build_streams(records: StreamRecordMap) -> Vec<Stream> {
    records.into_values().map(Stream::from_record).collect()
}
