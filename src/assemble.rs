//! View-model assembly with fallback substitution
//!
//! One rule, defined once: a non-empty live set is mapped into display
//! shape, an empty live set is replaced by the static fallback rows
//! unchanged. No I/O happens here; every function is pure.

use serde::Serialize;

use crate::enrich::AuthoredTopic;
use crate::entities::{Forum, Topic};

/// Prefer live rows, substitute the fallback set only when live is empty
///
/// The fallback set is returned exactly as declared; it never overrides a
/// non-empty live result.
pub fn assemble<T, D>(live: Vec<T>, fallback: Vec<D>, mapper: impl Fn(T) -> D) -> Vec<D> {
    if live.is_empty() {
        fallback
    } else {
        live.into_iter().map(mapper).collect()
    }
}

/// Display shape of a forum on the forums page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForumCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub topics: i64,
    pub replies: i64,
    pub last_activity: String,
    pub is_active: bool,
}

impl ForumCard {
    /// Live mapping for a forum row
    ///
    /// Topic and reply totals are not tracked on the forum row itself;
    /// until the store aggregates them they surface as 0, and the activity
    /// label as "Recent".
    pub fn from_forum(forum: Forum) -> Self {
        Self {
            id: forum.id,
            name: forum.name,
            description: forum.description.unwrap_or_default(),
            color: forum.color,
            topics: 0,
            replies: 0,
            last_activity: "Recent".to_string(),
            is_active: true,
        }
    }
}

/// Display shape of a topic on the dashboard's popular list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: String,
    pub likes: i64,
    pub comments: i64,
    pub tag: String,
}

impl TopicCard {
    /// Live mapping for a topic row
    ///
    /// Likes surface the stored counter (0 when the store has no figure);
    /// the field is never synthesized client-side.
    pub fn from_topic(topic: Topic) -> Self {
        Self {
            id: topic.id,
            title: topic.title,
            author: "Por Usuário".to_string(),
            category: "Community".to_string(),
            likes: topic.likes_count,
            comments: topic.replies_count,
            tag: "Discussão".to_string(),
        }
    }
}

/// Display shape of a topic inside a forum's topic list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForumTopicCard {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub author_username: String,
    pub created_at: String,
    pub replies_count: i64,
    pub likes_count: i64,
    pub is_pinned: bool,
}

impl ForumTopicCard {
    pub fn from_authored(topic: AuthoredTopic) -> Self {
        Self {
            id: topic.topic.id,
            title: topic.topic.title,
            content: topic.topic.content,
            author_name: topic.author_name,
            author_username: topic.author_username,
            created_at: topic.topic.created_at.to_rfc3339(),
            replies_count: topic.topic.replies_count,
            likes_count: topic.topic.likes_count,
            is_pinned: topic.topic.is_pinned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn make_topic(id: &str, replies: i64, likes: i64) -> Topic {
        Topic {
            id: id.to_string(),
            title: format!("topic {}", id),
            content: "content".to_string(),
            forum_id: "f1".to_string(),
            user_id: "u1".to_string(),
            replies_count: replies,
            likes_count: likes,
            is_pinned: false,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
        }
    }

    fn fallback_cards() -> Vec<TopicCard> {
        vec![TopicCard {
            id: "m1".to_string(),
            title: "mock".to_string(),
            author: "Por Martin".to_string(),
            category: "Listening".to_string(),
            likes: 24,
            comments: 6,
            tag: "Dicas".to_string(),
        }]
    }

    #[test]
    fn test_assemble_prefers_live_rows() {
        let live = vec![make_topic("t1", 3, 7)];
        let result = assemble(live.clone(), fallback_cards(), TopicCard::from_topic);

        let expected: Vec<TopicCard> = live.into_iter().map(TopicCard::from_topic).collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_assemble_empty_live_returns_fallback_unchanged() {
        let result = assemble(Vec::new(), fallback_cards(), TopicCard::from_topic);
        assert_eq!(result, fallback_cards());
    }

    #[test]
    fn test_topic_card_uses_stored_counters() {
        let card = TopicCard::from_topic(make_topic("t1", 12, 5));
        assert_eq!(card.comments, 12);
        assert_eq!(card.likes, 5);
    }

    #[test]
    fn test_forum_card_defaults() {
        let card = ForumCard::from_forum(Forum {
            id: "f1".to_string(),
            name: "Grammar & Vocabulary".to_string(),
            description: None,
            color: "#3B82F6".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            created_by: None,
        });

        assert_eq!(card.description, "");
        assert_eq!(card.topics, 0);
        assert_eq!(card.last_activity, "Recent");
        assert!(card.is_active);
    }
}
