//! Dashboard Preview - renders the feed read models against a live store
//!
//! Fetches every view the dashboard composes (forums, popular topics,
//! author-annotated topics, leaderboard, achievements) and logs a summary,
//! which makes it a quick probe for store connectivity and fallback
//! behavior.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin dashboard
//! ```
//!
//! ## Environment Variables
//!
//! - STUDYHUB_STORE_URL - Base URL of the remote row store (default: http://localhost:54321)
//! - STUDYHUB_STORE_KEY - API key for the store (default: empty)
//! - STUDYHUB_USER_ID - Principal pinned into the leaderboard (optional)
//! - STUDYHUB_POPULAR_TOPICS_LIMIT - Popular list size (default: 4)
//! - STUDYHUB_RECENT_TOPICS_LIMIT - Author-annotated list size (default: 10)
//! - STUDYHUB_LEADERBOARD_WINDOW - Leaderboard window size (default: 3)
//! - RUST_LOG - Logging level (optional, default: info)

use std::env;
use std::sync::Arc;

use studyhub::store::HttpRowStore;
use studyhub::{Feed, FeedConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = FeedConfig::from_env();
    let current_user_id = env::var("STUDYHUB_USER_ID").ok();

    log::info!("🚀 Starting StudyHub dashboard preview");
    log::info!("   Store URL: {}", config.store_url);
    log::info!("   Popular topics limit: {}", config.popular_topics_limit);
    log::info!("   Recent topics limit: {}", config.recent_topics_limit);
    log::info!("   Leaderboard window: {}", config.leaderboard_window);
    match &current_user_id {
        Some(user_id) => log::info!("   Current user: {}", user_id),
        None => log::info!("   Current user: none (no leaderboard pin)"),
    }

    let store = Arc::new(HttpRowStore::new(&config)?);
    let feed = Feed::new(store);

    let forums = feed.forums_list().await;
    match &forums.error {
        Some(error) => log::warn!("forums degraded to fallback: {}", error),
        None => log::info!("📋 {} forums", forums.forums.len()),
    }
    for forum in &forums.forums {
        log::info!(
            "   ├─ {} — {} topics, {} replies",
            forum.name,
            forum.topics,
            forum.replies
        );
    }

    let popular = feed.popular_topics(config.popular_topics_limit).await;
    log::info!("🔥 {} popular topics", popular.topics.len());
    for topic in &popular.topics {
        log::info!(
            "   ├─ {} ({} comments, {} likes)",
            topic.title,
            topic.comments,
            topic.likes
        );
    }

    let recent = feed
        .recent_topics_with_authors(config.recent_topics_limit)
        .await;
    log::info!("🕒 {} recent topics", recent.topics.len());
    for topic in &recent.topics {
        log::info!("   ├─ {} — by {}", topic.topic.title, topic.author_name);
    }

    let leaderboard = feed
        .leaderboard(config.leaderboard_window, current_user_id.as_deref())
        .await;
    log::info!("🏆 Monthly ranking");
    for row in &leaderboard.rows {
        let marker = if row.highlight { " (you)" } else { "" };
        log::info!(
            "   ├─ #{} {} — {} XP{}",
            row.position,
            row.display_name,
            row.points,
            marker
        );
    }

    if let Some(forum) = forums.forums.first() {
        let topics = feed.forum_topics(&forum.id, None).await;
        log::info!(
            "📌 Forum '{}': {} pinned, {} regular topics",
            forum.name,
            topics.pinned.len(),
            topics.regular.len()
        );
    }

    let achievements = feed
        .achievement_progress(current_user_id.as_deref())
        .await;
    match &achievements.error {
        Some(error) => log::warn!("achievements unavailable: {}", error),
        None => log::info!(
            "🎖️ Achievements: {} earned, {} available, {} XP collected",
            achievements.earned.len(),
            achievements.available.len(),
            achievements.points_earned
        ),
    }

    let materials = feed.study_materials().await;
    match &materials.error {
        Some(error) => log::warn!("study materials unavailable: {}", error),
        None => log::info!("📚 {} study materials", materials.materials.len()),
    }

    log::info!("✅ Dashboard preview complete");
    Ok(())
}
