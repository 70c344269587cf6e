//! Broadcaster profile enrichment.
//!
//! Streams reference their broadcaster only by `user_id`; one batch
//! call resolves every referenced profile so the aggregator can join
//! them onto the normalized stream records.

use std::collections::{HashMap, HashSet};

use helix_client::RawStream;

use crate::api::StreamingApi;
use crate::records::UserRecord;

/// Resolve the broadcaster profiles referenced by `raw_streams` into
/// an id-keyed map.
///
/// Distinct non-empty `user_id`s are collected in first-seen order and
/// fetched with a single API call. No referenced users means no call.
/// A failed call is logged and yields an empty map, so every stream's
/// `user` resolves to `None` instead of failing the stream fetch.
pub async fn resolve_users<A: StreamingApi>(
    api: &A,
    raw_streams: &[RawStream],
) -> HashMap<String, UserRecord> {
    let mut seen = HashSet::new();
    let mut user_ids = Vec::new();
    for stream in raw_streams {
        if let Some(id) = stream.user_id.as_deref()
            && !id.is_empty()
            && seen.insert(id.to_string())
        {
            user_ids.push(id.to_string());
        }
    }

    if user_ids.is_empty() {
        return HashMap::new();
    }

    let raw_users = match api.fetch_users(&user_ids).await {
        Ok(users) => users,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch users, streams will carry no profiles");
            return HashMap::new();
        }
    };

    let mut users = HashMap::new();
    for raw in raw_users {
        let record = UserRecord::from_raw(raw);
        users.insert(record.id.clone(), record);
    }
    users
}
