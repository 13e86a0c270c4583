//! Author enrichment for topic lists
//!
//! Attaches the author's display fields to each topic. The lookup is one
//! batched `user_id in (...)` fetch followed by an in-memory join, so the
//! output order is the input order by construction. A topic whose author
//! has no profile row gets the declared fallback identity; a failed lookup
//! degrades every annotation to the fallback and is logged, never
//! propagated.

use std::collections::HashMap;

use serde::Serialize;

use crate::entities::{Profile, Topic};
use crate::fetch;
use crate::store::RowStore;

/// Author shown when the profile lookup misses
pub const FALLBACK_AUTHOR_NAME: &str = "Anonymous";
pub const FALLBACK_AUTHOR_USERNAME: &str = "user";

/// A topic plus its author's denormalized display fields
///
/// Derived at read time, never persisted. The source topic is embedded
/// unchanged: dropping the author fields yields the original row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthoredTopic {
    #[serde(flatten)]
    pub topic: Topic,
    pub author_name: String,
    pub author_username: String,
}

impl AuthoredTopic {
    fn with_fallback_author(topic: Topic) -> Self {
        Self {
            topic,
            author_name: FALLBACK_AUTHOR_NAME.to_string(),
            author_username: FALLBACK_AUTHOR_USERNAME.to_string(),
        }
    }

    fn with_profile(topic: Topic, profile: &Profile) -> Self {
        Self {
            topic,
            author_name: profile.display_name.clone(),
            author_username: profile
                .username
                .clone()
                .unwrap_or_else(|| FALLBACK_AUTHOR_USERNAME.to_string()),
        }
    }
}

/// Distinct join keys in first-seen order
fn distinct_user_ids(topics: &[Topic]) -> Vec<String> {
    let mut seen = Vec::new();
    for topic in topics {
        if !seen.contains(&topic.user_id) {
            seen.push(topic.user_id.clone());
        }
    }
    seen
}

/// Annotate each topic with its author's display name and username
///
/// Partial-failure policy: a lookup error must not void the list, so the
/// whole batch degrades to fallback authors and the error is logged.
pub async fn with_authors(store: &dyn RowStore, topics: Vec<Topic>) -> Vec<AuthoredTopic> {
    if topics.is_empty() {
        return Vec::new();
    }

    let user_ids = distinct_user_ids(&topics);
    let profiles = match fetch::profiles_by_user_ids(store, &user_ids).await {
        Ok(profiles) => profiles,
        Err(e) => {
            log::warn!("author lookup failed, falling back to default authors: {}", e);
            Vec::new()
        }
    };

    let by_user_id: HashMap<&str, &Profile> = profiles
        .iter()
        .map(|profile| (profile.user_id.as_str(), profile))
        .collect();

    topics
        .into_iter()
        .map(|topic| match by_user_id.get(topic.user_id.as_str()) {
            Some(profile) => AuthoredTopic::with_profile(topic, profile),
            None => AuthoredTopic::with_fallback_author(topic),
        })
        .collect()
}
