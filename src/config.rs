//! Feed configuration from environment variables

use std::env;

/// Configuration for the feed layer and its store client
///
/// Loaded from environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Base URL of the remote row store
    pub store_url: String,

    /// API key sent with every store request
    pub store_key: String,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// How many recent topics the author-annotated feed fetches
    pub recent_topics_limit: usize,

    /// How many topics the popular-topics view keeps
    pub popular_topics_limit: usize,

    /// Size of the leaderboard display window
    pub leaderboard_window: usize,
}

impl FeedConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `STUDYHUB_STORE_URL` (default: http://localhost:54321)
    /// - `STUDYHUB_STORE_KEY` (default: empty)
    /// - `STUDYHUB_REQUEST_TIMEOUT_SECS` (default: 10)
    /// - `STUDYHUB_RECENT_TOPICS_LIMIT` (default: 10)
    /// - `STUDYHUB_POPULAR_TOPICS_LIMIT` (default: 4)
    /// - `STUDYHUB_LEADERBOARD_WINDOW` (default: 3)
    pub fn from_env() -> Self {
        Self {
            store_url: env::var("STUDYHUB_STORE_URL")
                .unwrap_or_else(|_| "http://localhost:54321".to_string()),

            store_key: env::var("STUDYHUB_STORE_KEY").unwrap_or_default(),

            request_timeout_secs: env::var("STUDYHUB_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),

            recent_topics_limit: env::var("STUDYHUB_RECENT_TOPICS_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),

            popular_topics_limit: env::var("STUDYHUB_POPULAR_TOPICS_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(4),

            leaderboard_window: env::var("STUDYHUB_LEADERBOARD_WINDOW")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_and_overrides() {
        // Runs defaults and overrides in one test so the shared process
        // environment is not mutated from two threads at once.
        env::remove_var("STUDYHUB_STORE_URL");
        env::remove_var("STUDYHUB_STORE_KEY");
        env::remove_var("STUDYHUB_REQUEST_TIMEOUT_SECS");
        env::remove_var("STUDYHUB_RECENT_TOPICS_LIMIT");
        env::remove_var("STUDYHUB_POPULAR_TOPICS_LIMIT");
        env::remove_var("STUDYHUB_LEADERBOARD_WINDOW");

        let config = FeedConfig::from_env();

        assert_eq!(config.store_url, "http://localhost:54321");
        assert_eq!(config.store_key, "");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.recent_topics_limit, 10);
        assert_eq!(config.popular_topics_limit, 4);
        assert_eq!(config.leaderboard_window, 3);

        env::set_var("STUDYHUB_STORE_URL", "http://store.internal:8000");
        env::set_var("STUDYHUB_REQUEST_TIMEOUT_SECS", "3");
        env::set_var("STUDYHUB_POPULAR_TOPICS_LIMIT", "8");

        let config = FeedConfig::from_env();

        assert_eq!(config.store_url, "http://store.internal:8000");
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.popular_topics_limit, 8);

        // Cleanup
        env::remove_var("STUDYHUB_STORE_URL");
        env::remove_var("STUDYHUB_REQUEST_TIMEOUT_SECS");
        env::remove_var("STUDYHUB_POPULAR_TOPICS_LIMIT");
    }
}
