#[cfg(test)]
mod tests {
    use {
        crate::entities::Topic,
        crate::enrich::AuthoredTopic,
        crate::feed::Feed,
        crate::store::MemoryStore,
        chrono::{TimeZone, Utc},
        std::sync::Arc,
    };

    fn make_topic(id: &str, replies: i64, created_day: u32) -> Topic {
        Topic {
            id: id.to_string(),
            title: format!("topic {}", id),
            content: "content".to_string(),
            forum_id: "f1".to_string(),
            user_id: "u1".to_string(),
            replies_count: replies,
            likes_count: 0,
            is_pinned: false,
            created_at: Utc.with_ymd_and_hms(2024, 3, created_day, 12, 0, 0).unwrap(),
        }
    }

    /// Authored topics serialize with the author fields flattened next to
    /// the topic columns, matching the display shape
    #[test]
    fn test_authored_topic_serializes_flat() {
        let authored = AuthoredTopic {
            topic: make_topic("t1", 3, 1),
            author_name: "Maria Silva".to_string(),
            author_username: "maria_s".to_string(),
        };

        let value = serde_json::to_value(&authored).unwrap();
        assert_eq!(value["id"], "t1");
        assert_eq!(value["title"], "topic t1");
        assert_eq!(value["author_name"], "Maria Silva");
        assert_eq!(value["author_username"], "maria_s");
    }

    /// Fetch, rank and assemble compose end to end over the fake store
    #[tokio::test]
    async fn test_popular_topics_pipeline() {
        let store = Arc::new(MemoryStore::new());
        store.seed(
            "topics",
            vec![
                make_topic("t1", 5, 3),
                make_topic("t2", 20, 2),
                make_topic("t3", 8, 1),
            ],
        );

        let feed = Feed::new(store);
        let view = feed.popular_topics(2).await;

        assert!(view.error.is_none());
        let ids: Vec<&str> = view.topics.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t2", "t3"]);
        assert_eq!(view.topics[0].comments, 20);
    }
}
