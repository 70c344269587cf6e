use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use super::*;

impl HelixClient {
    pub fn new(client_id: String, access_token: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            access_token,
        }
    }

    /// Build auth headers from the stored token.
    fn auth_headers(&self) -> Result<HeaderMap, HelixError> {
        let mut headers = HeaderMap::new();
        let bearer = format!("Bearer {}", self.access_token);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&bearer).map_err(|_| HelixError::ApiError {
                status: 400,
                message: "Invalid access token".into(),
            })?,
        );
        headers.insert(
            "Client-Id",
            HeaderValue::from_str(&self.client_id).map_err(|_| HelixError::ApiError {
                status: 400,
                message: "Invalid client id".into(),
            })?,
        );
        Ok(headers)
    }

    /// Execute a GET request with auth headers.
    pub(crate) async fn authenticated_get(&self, url: &str) -> Result<String, HelixError> {
        let headers = self.auth_headers()?;
        let resp = self.http.get(url).headers(headers).send().await?;

        let status = resp.status();
        let body = resp.text().await?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!(url, "Got 401, caller should supply a fresh token");
            return Err(HelixError::ApiError {
                status: 401,
                message: body,
            });
        }

        if !status.is_success() {
            return Err(HelixError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}
