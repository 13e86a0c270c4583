//! Row types served by the remote store
//!
//! These mirror the store's table shapes one to one. Counter and flag
//! columns carry serde defaults so older rows without them still decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discussion board grouping topics by theme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forum {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_forum_color")]
    pub color: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Option<String>,
}

fn default_forum_color() -> String {
    "#3B82F6".to_string()
}

/// Discussion thread inside a forum
///
/// Reply and like counters are maintained by collaborator systems; this
/// crate only reads and ranks them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    pub content: String,
    pub forum_id: String,
    pub user_id: String,
    #[serde(default)]
    pub replies_count: i64,
    #[serde(default)]
    pub likes_count: i64,
    #[serde(default)]
    pub is_pinned: bool,
    pub created_at: DateTime<Utc>,
}

/// Public profile row, used as a join target for author annotation and as
/// the leaderboard source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub display_name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub total_points: i64,
    #[serde(default)]
    pub monthly_points: i64,
    #[serde(default)]
    pub ranking_position: Option<i64>,
    #[serde(default)]
    pub monthly_ranking_position: Option<i64>,
    #[serde(default)]
    pub study_streak: i64,
    #[serde(default = "default_level")]
    pub level: i64,
    pub created_at: DateTime<Utc>,
}

fn default_level() -> i64 {
    1
}

/// Structured requirement predicate attached to an achievement
///
/// Currently only a minimum-points threshold is defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default)]
    pub points: Option<i64>,
}

/// Catalog entry describing an earnable badge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub badge_color: String,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub points_reward: i64,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub requirements: Option<Requirement>,
}

/// Join row linking a profile to an achievement once earned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAchievement {
    pub id: String,
    pub achievement_id: String,
    pub user_id: String,
    pub earned_at: DateTime<Utc>,
}

/// Uploaded learning material; `pdf_url` is an opaque public URL produced
/// by the blob-store collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyMaterial {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub level: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub pdf_url: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new forum
#[derive(Debug, Clone, Serialize)]
pub struct NewForum {
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_by: String,
}

/// Insert payload for a new topic
#[derive(Debug, Clone, Serialize)]
pub struct NewTopic {
    pub title: String,
    pub content: String,
    pub forum_id: String,
    pub user_id: String,
}

/// Insert payload for a new study material
#[derive(Debug, Clone, Serialize)]
pub struct NewStudyMaterial {
    pub title: String,
    pub description: String,
    pub level: String,
    pub duration: String,
    pub author: String,
    pub topics: Vec<String>,
    pub pdf_url: String,
    pub rating: f64,
    pub created_by: String,
}
