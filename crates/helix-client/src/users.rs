use super::*;

impl HelixClient {
    /// Get user profiles by user IDs (up to 100) in a single batch call.
    pub async fn get_users_by_ids(&self, user_ids: &[String]) -> Result<Vec<RawUser>, HelixError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = user_ids
            .iter()
            .take(100)
            .map(|id| format!("id={id}"))
            .collect::<Vec<_>>()
            .join("&");
        let url = format!("{HELIX_BASE}/users?{query}");
        let body = self.authenticated_get(&url).await?;
        let resp: HelixResponse<RawUser> = serde_json::from_str(&body)?;
        Ok(resp.data)
    }
}
