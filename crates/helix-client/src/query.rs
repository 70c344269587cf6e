use url::form_urlencoded;

/// Free-form query parameters for GET /helix/streams.
///
/// Parameters keep their insertion order for URL rendering; cache-key
/// derivation canonicalizes them separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamQuery {
    params: Vec<(String, String)>,
}

impl StreamQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of streams to return (Helix caps at 100).
    pub fn first(self, first: u32) -> Self {
        self.set("first", first.clamp(1, 100).to_string())
    }

    pub fn game_id(self, game_id: impl Into<String>) -> Self {
        self.set("game_id", game_id)
    }

    pub fn language(self, language: impl Into<String>) -> Self {
        self.set("language", language)
    }

    pub fn user_login(self, login: impl Into<String>) -> Self {
        self.set("user_login", login)
    }

    /// Append an arbitrary key/value pair. Repeated keys are allowed;
    /// Helix treats them as multi-value filters.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Render as a URL-encoded query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            ser.append_pair(key, value);
        }
        ser.finish()
    }
}
