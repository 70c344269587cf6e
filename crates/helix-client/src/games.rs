use super::*;

impl HelixClient {
    /// Get the current top games (up to 100 entries).
    pub async fn get_top_games(&self, first: u32) -> Result<Vec<RawGame>, HelixError> {
        let first = first.clamp(1, 100);
        let url = format!("{HELIX_BASE}/games/top?first={first}");
        let body = self.authenticated_get(&url).await?;
        let resp: HelixResponse<RawGame> = serde_json::from_str(&body)?;
        Ok(resp.data)
    }
}
