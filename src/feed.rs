//! Read-model façade consumed by presentation
//!
//! Each method resolves one view end to end: fetch, enrich, rank, assemble.
//! Fetch errors surface as an `error` field on the view state instead of
//! bubbling out, so the consumer can key an empty state or a retry
//! affordance off it. Views are fresh values with no shared mutable state;
//! dropping the future on navigation discards in-flight work without
//! touching anything the consumer owned.

use std::sync::Arc;

use serde::Serialize;

use crate::achievements::{self, AchievementStatus};
use crate::assemble::{assemble, ForumCard, ForumTopicCard, TopicCard};
use crate::enrich::{self, AuthoredTopic};
use crate::entities::{NewForum, NewStudyMaterial, NewTopic, StudyMaterial};
use crate::fallback;
use crate::fetch;
use crate::rank;
use crate::store::{BlobStore, RowStore, StoreError};

/// Bucket holding uploaded study-material PDFs
const MATERIALS_BUCKET: &str = "study-materials";

pub struct Feed {
    store: Arc<dyn RowStore>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForumsView {
    pub forums: Vec<ForumCard>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularTopicsView {
    pub topics: Vec<TopicCard>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthoredTopicsView {
    pub topics: Vec<AuthoredTopic>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardView {
    pub rows: Vec<rank::LeaderboardRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForumTopicsView {
    pub pinned: Vec<ForumTopicCard>,
    pub regular: Vec<ForumTopicCard>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementsView {
    pub earned: Vec<AchievementStatus>,
    pub available: Vec<AchievementStatus>,
    pub points_earned: i64,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialsView {
    pub materials: Vec<StudyMaterial>,
    pub error: Option<String>,
}

/// Metadata and bytes for one study-material upload
#[derive(Debug, Clone)]
pub struct MaterialUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub title: String,
    pub description: String,
    pub level: String,
    pub duration: String,
    pub author: String,
    pub topics: Vec<String>,
    pub rating: f64,
    pub created_by: String,
}

impl Feed {
    pub fn new(store: Arc<dyn RowStore>) -> Self {
        Self { store }
    }

    fn store(&self) -> &dyn RowStore {
        self.store.as_ref()
    }

    /// All forums as display cards, oldest first
    pub async fn forums_list(&self) -> ForumsView {
        match fetch::forums(self.store()).await {
            Ok(live) => ForumsView {
                forums: assemble(live, fallback::forums(), ForumCard::from_forum),
                error: None,
            },
            Err(e) => {
                log::error!("error fetching forums: {}", e);
                ForumsView {
                    forums: fallback::forums(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Top `n` topics by reply count
    ///
    /// Topics are fetched newest first and ranked here, so ties on the
    /// reply count resolve to the more recent topic deterministically.
    pub async fn popular_topics(&self, n: usize) -> PopularTopicsView {
        match fetch::recent_topics(self.store(), 0).await {
            Ok(live) => {
                let ranked = rank::select_top(live, |topic| topic.replies_count, n);
                PopularTopicsView {
                    topics: assemble(ranked, fallback::dashboard_topics(), TopicCard::from_topic),
                    error: None,
                }
            }
            Err(e) => {
                log::error!("error fetching popular topics: {}", e);
                PopularTopicsView {
                    topics: fallback::dashboard_topics(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// The latest topics annotated with their authors, newest first
    pub async fn recent_topics_with_authors(&self, limit: usize) -> AuthoredTopicsView {
        let topics = match fetch::recent_topics(self.store(), limit).await {
            Ok(topics) => topics,
            Err(e) => {
                log::error!("error fetching topics: {}", e);
                return AuthoredTopicsView { topics: Vec::new() };
            }
        };

        AuthoredTopicsView {
            topics: enrich::with_authors(self.store(), topics).await,
        }
    }

    /// Monthly leaderboard window with the current user pinned in
    pub async fn leaderboard(&self, window: usize, current_user_id: Option<&str>) -> LeaderboardView {
        let profiles = match fetch::top_profiles(self.store(), window).await {
            Ok(profiles) => profiles,
            Err(e) => {
                log::error!("error fetching leaderboard profiles: {}", e);
                return LeaderboardView {
                    rows: fallback::monthly_ranking(),
                };
            }
        };

        if profiles.is_empty() {
            return LeaderboardView {
                rows: fallback::monthly_ranking(),
            };
        }

        let current = match current_user_id {
            Some(user_id) => match fetch::profile_by_user_id(self.store(), user_id).await {
                Ok(profile) => profile,
                Err(e) => {
                    log::warn!("current-user lookup failed for {}: {}", user_id, e);
                    None
                }
            },
            None => None,
        };

        LeaderboardView {
            rows: rank::leaderboard_window(profiles, window, current.as_ref()),
        }
    }

    /// One forum's topic list: author-annotated, searchable, pinned first
    pub async fn forum_topics(&self, forum_id: &str, search: Option<&str>) -> ForumTopicsView {
        let (cards, error) = match fetch::topics_in_forum(self.store(), forum_id).await {
            Ok(live) => {
                let enriched = enrich::with_authors(self.store(), live).await;
                (
                    assemble(
                        enriched,
                        fallback::forum_topics(),
                        ForumTopicCard::from_authored,
                    ),
                    None,
                )
            }
            Err(e) => {
                log::error!("error fetching topics for forum {}: {}", forum_id, e);
                (fallback::forum_topics(), Some(e.to_string()))
            }
        };

        let cards = match search {
            Some(term) if !term.is_empty() => rank::search_forum_topics(cards, term),
            _ => cards,
        };

        let (pinned, regular) = rank::pinned_first(cards);
        ForumTopicsView {
            pinned,
            regular,
            error,
        }
    }

    /// Achievement catalog annotated with one user's standing
    ///
    /// A failed earned-rows or profile lookup degrades to "nothing earned
    /// yet" rather than voiding the catalog.
    pub async fn achievement_progress(&self, user_id: Option<&str>) -> AchievementsView {
        let catalog = match fetch::active_achievements(self.store()).await {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("error fetching achievements: {}", e);
                return AchievementsView {
                    earned: Vec::new(),
                    available: Vec::new(),
                    points_earned: 0,
                    error: Some(e.to_string()),
                };
            }
        };

        let (earned_rows, profile) = match user_id {
            Some(user_id) => {
                let earned_rows = match fetch::achievements_for_user(self.store(), user_id).await {
                    Ok(rows) => rows,
                    Err(e) => {
                        log::warn!("earned-achievement lookup failed for {}: {}", user_id, e);
                        Vec::new()
                    }
                };
                let profile = match fetch::profile_by_user_id(self.store(), user_id).await {
                    Ok(profile) => profile,
                    Err(e) => {
                        log::warn!("profile lookup failed for {}: {}", user_id, e);
                        None
                    }
                };
                (earned_rows, profile)
            }
            None => (Vec::new(), None),
        };

        let (earned, available) =
            achievements::partition_catalog(catalog, &earned_rows, profile.as_ref());
        let points_earned = achievements::points_earned(&earned);

        AchievementsView {
            earned,
            available,
            points_earned,
            error: None,
        }
    }

    /// All study materials, newest first
    pub async fn study_materials(&self) -> MaterialsView {
        match fetch::study_materials(self.store()).await {
            Ok(materials) => MaterialsView {
                materials,
                error: None,
            },
            Err(e) => {
                log::error!("error fetching study materials: {}", e);
                MaterialsView {
                    materials: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    /// Create a forum; the new row appears on the next `forums_list` fetch
    pub async fn create_forum(&self, forum: &NewForum) -> Result<String, StoreError> {
        let id = fetch::insert_forum(self.store(), forum).await?;
        log::info!("created forum {} ({})", forum.name, id);
        Ok(id)
    }

    /// Create a topic inside a forum
    ///
    /// The forum reference must resolve to an existing forum; the store
    /// enforces that precondition.
    pub async fn create_topic(&self, topic: &NewTopic) -> Result<String, StoreError> {
        let id = fetch::insert_topic(self.store(), topic).await?;
        log::info!("created topic {} in forum {}", id, topic.forum_id);
        Ok(id)
    }

    /// Upload a PDF to the blob store, then register the material row
    /// carrying its public URL
    pub async fn add_study_material(
        &self,
        blobs: &dyn BlobStore,
        upload: MaterialUpload,
    ) -> Result<String, StoreError> {
        let pdf_url = blobs
            .upload(MATERIALS_BUCKET, &upload.file_name, upload.bytes)
            .await?;

        let material = NewStudyMaterial {
            title: upload.title,
            description: upload.description,
            level: upload.level,
            duration: upload.duration,
            author: upload.author,
            topics: upload.topics,
            pdf_url,
            rating: upload.rating,
            created_by: upload.created_by,
        };

        let id = fetch::insert_study_material(self.store(), &material).await?;
        log::info!("registered study material {} ({})", material.title, id);
        Ok(id)
    }
}
