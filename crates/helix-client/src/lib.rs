//! Twitch Helix REST API client.
//!
//! Provides typed access to the Helix endpoints consumed by the
//! stream widget (top games, streams, users) with automatic
//! Bearer token + Client-ID header injection.
//!
//! Raw response models keep every field optional; callers are
//! expected to run their own defaulting/normalization pass.

mod games;
mod query;
mod request;
mod streams;
mod users;

pub mod models;

pub use models::{HelixResponse, RawGame, RawStream, RawUser};
pub use query::StreamQuery;

const HELIX_BASE: &str = "https://api.twitch.tv/helix";

/// Twitch Helix API client with automatic auth header injection.
pub struct HelixClient {
    pub(crate) http: reqwest::Client,
    pub(crate) client_id: String,
    pub(crate) access_token: String,
}

/// Unified error type for the helix-client crate.
#[derive(Debug, thiserror::Error)]
pub enum HelixError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Twitch API error (status {status}): {message}")]
    ApiError { status: u16, message: String },
}
