#[cfg(test)]
mod tests;

pub mod achievements;
pub mod assemble;
pub mod config;
pub mod enrich;
pub mod entities;
pub mod fallback;
pub mod feed;
pub mod fetch;
pub mod rank;
pub mod store;

// Re-export commonly used types
pub use achievements::AchievementStatus;
pub use assemble::{assemble, ForumCard, ForumTopicCard, TopicCard};
pub use config::FeedConfig;
pub use enrich::AuthoredTopic;
pub use entities::{Achievement, Forum, Profile, StudyMaterial, Topic, UserAchievement};
pub use feed::Feed;
pub use rank::{select_top, LeaderboardRow};
pub use store::{BlobStore, Filter, Query, RowStore, StoreError};
