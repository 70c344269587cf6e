use super::*;

impl HelixClient {
    /// Get live streams matching the given query (single page).
    pub async fn get_streams(&self, query: &StreamQuery) -> Result<Vec<RawStream>, HelixError> {
        let url = if query.is_empty() {
            format!("{HELIX_BASE}/streams")
        } else {
            format!("{HELIX_BASE}/streams?{}", query.to_query_string())
        };
        let body = self.authenticated_get(&url).await?;
        let resp: HelixResponse<RawStream> = serde_json::from_str(&body)?;
        Ok(resp.data)
    }
}
