//! Upstream streaming API boundary.
//!
//! The pipeline is generic over [`StreamingApi`] so tests can script
//! responses; [`HelixApi`] is the production implementation backed by
//! [`helix_client::HelixClient`].

use helix_client::{HelixClient, HelixError, RawGame, RawStream, RawUser, StreamQuery};

/// The three upstream calls the widget core depends on.
#[allow(async_fn_in_trait)]
pub trait StreamingApi {
    /// Fetch the top games catalog (single page, up to `first` entries).
    async fn fetch_top_games(&self, first: u32) -> Result<Vec<RawGame>, HelixError>;

    /// Fetch live streams matching a query (single page).
    async fn fetch_streams(&self, query: &StreamQuery) -> Result<Vec<RawStream>, HelixError>;

    /// Batch-fetch user profiles by id.
    async fn fetch_users(&self, user_ids: &[String]) -> Result<Vec<RawUser>, HelixError>;
}

/// Production [`StreamingApi`] backed by the Helix REST client.
pub struct HelixApi {
    client: HelixClient,
}

impl HelixApi {
    pub fn new(client: HelixClient) -> Self {
        Self { client }
    }
}

impl StreamingApi for HelixApi {
    async fn fetch_top_games(&self, first: u32) -> Result<Vec<RawGame>, HelixError> {
        self.client.get_top_games(first).await
    }

    async fn fetch_streams(&self, query: &StreamQuery) -> Result<Vec<RawStream>, HelixError> {
        self.client.get_streams(query).await
    }

    async fn fetch_users(&self, user_ids: &[String]) -> Result<Vec<RawUser>, HelixError> {
        self.client.get_users_by_ids(user_ids).await
    }
}
