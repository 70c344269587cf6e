//! Deterministic cache-key derivation.
//!
//! Stream query keys are a hash of the canonicalized parameter set,
//! so logically identical queries share one cache entry regardless of
//! the order the caller supplied the parameters in.

/// Prefix shared by every cache entry this crate writes.
pub const CACHE_PREFIX: &str = "tw_widget_";

/// Prefix for per-query stream cache entries.
pub const STREAMS_PREFIX: &str = "tw_widget_streams_";

/// Fixed key for the game catalog (no parameters).
pub fn games_key() -> String {
    format!("{CACHE_PREFIX}games")
}

/// Derive the cache key for a stream query parameter set.
///
/// Parameters are sorted by key (ties broken by value) before being
/// serialized, then hashed. An empty parameter set is valid and maps
/// to a fixed key.
pub fn streams_key(params: &[(String, String)]) -> String {
    let mut canonical: Vec<(&str, &str)> = params
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    canonical.sort_unstable();

    // Pairs of strings always serialize; fall back to the debug form
    // rather than panicking if that ever changes.
    let serialized = serde_json::to_string(&canonical).unwrap_or_else(|_| format!("{canonical:?}"));
    let digest = md5::compute(serialized.as_bytes());
    format!("{STREAMS_PREFIX}{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_key_is_deterministic() {
        let p = params(&[("game_id", "33214"), ("first", "20")]);
        assert_eq!(streams_key(&p), streams_key(&p));
    }

    #[test]
    fn test_key_is_order_insensitive() {
        let a = params(&[("game_id", "33214"), ("first", "20")]);
        let b = params(&[("first", "20"), ("game_id", "33214")]);
        assert_eq!(streams_key(&a), streams_key(&b));
    }

    #[test]
    fn test_different_params_different_keys() {
        let a = params(&[("game_id", "33214")]);
        let b = params(&[("game_id", "12345")]);
        assert_ne!(streams_key(&a), streams_key(&b));
    }

    #[test]
    fn test_empty_params_fixed_key() {
        assert_eq!(streams_key(&[]), streams_key(&[]));
        assert!(streams_key(&[]).starts_with(STREAMS_PREFIX));
    }

    #[test]
    fn test_namespaces_nest() {
        let p = params(&[("first", "20")]);
        assert!(streams_key(&p).starts_with(STREAMS_PREFIX));
        assert!(streams_key(&p).starts_with(CACHE_PREFIX));
        assert!(games_key().starts_with(CACHE_PREFIX));
        assert!(!games_key().starts_with(STREAMS_PREFIX));
    }
}
