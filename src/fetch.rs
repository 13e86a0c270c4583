//! Typed entity fetchers over the row store
//!
//! Each accessor declares its table, filter and ordering once; rows are
//! decoded from the store's raw JSON here so callers only ever see typed
//! entities. Fetchers are read-only; the `insert_*` accessors at the bottom
//! back the creation dialogs.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::entities::{
    Achievement, Forum, NewForum, NewStudyMaterial, NewTopic, Profile, StudyMaterial, Topic,
    UserAchievement,
};
use crate::store::{Query, RowStore, StoreError};

/// Fetch and decode all rows matching `query`
pub async fn rows<T: DeserializeOwned>(
    store: &dyn RowStore,
    table: &str,
    query: Query,
) -> Result<Vec<T>, StoreError> {
    let raw = store.select(table, query).await?;
    raw.into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|e| StoreError::Decode {
                table: table.to_string(),
                detail: e.to_string(),
            })
        })
        .collect()
}

/// All forums, oldest first
pub async fn forums(store: &dyn RowStore) -> Result<Vec<Forum>, StoreError> {
    rows(store, "forums", Query::order_by("created_at", true)).await
}

/// Recent topics across all forums, newest first
///
/// A `limit` of 0 fetches everything.
pub async fn recent_topics(store: &dyn RowStore, limit: usize) -> Result<Vec<Topic>, StoreError> {
    let mut query = Query::order_by("created_at", false);
    if limit > 0 {
        query = query.limit(limit);
    }
    rows(store, "topics", query).await
}

/// Topics of one forum, newest first
pub async fn topics_in_forum(
    store: &dyn RowStore,
    forum_id: &str,
) -> Result<Vec<Topic>, StoreError> {
    rows(
        store,
        "topics",
        Query::order_by("created_at", false).eq("forum_id", forum_id),
    )
    .await
}

/// Profiles for the given user ids, in one batched call
///
/// Returns an empty list for an empty id set without touching the store.
pub async fn profiles_by_user_ids(
    store: &dyn RowStore,
    user_ids: &[String],
) -> Result<Vec<Profile>, StoreError> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }
    rows(
        store,
        "profiles",
        Query::order_by("created_at", true).any_of("user_id", user_ids.to_vec()),
    )
    .await
}

/// Single profile lookup by owning user id
pub async fn profile_by_user_id(
    store: &dyn RowStore,
    user_id: &str,
) -> Result<Option<Profile>, StoreError> {
    let mut profiles: Vec<Profile> = rows(
        store,
        "profiles",
        Query::order_by("created_at", true)
            .eq("user_id", user_id)
            .limit(1),
    )
    .await?;
    Ok(if profiles.is_empty() {
        None
    } else {
        Some(profiles.remove(0))
    })
}

/// Top profiles by monthly points, best first
pub async fn top_profiles(store: &dyn RowStore, limit: usize) -> Result<Vec<Profile>, StoreError> {
    rows(
        store,
        "profiles",
        Query::order_by("monthly_points", false).limit(limit),
    )
    .await
}

/// Active achievement catalog, highest reward first
pub async fn active_achievements(store: &dyn RowStore) -> Result<Vec<Achievement>, StoreError> {
    rows(
        store,
        "achievements",
        Query::order_by("points_reward", false).eq("is_active", "true"),
    )
    .await
}

/// Earned-achievement join rows for one user
pub async fn achievements_for_user(
    store: &dyn RowStore,
    user_id: &str,
) -> Result<Vec<UserAchievement>, StoreError> {
    rows(
        store,
        "user_achievements",
        Query::order_by("earned_at", false).eq("user_id", user_id),
    )
    .await
}

/// All study materials, newest first
pub async fn study_materials(store: &dyn RowStore) -> Result<Vec<StudyMaterial>, StoreError> {
    rows(
        store,
        "study_materials",
        Query::order_by("created_at", false),
    )
    .await
}

async fn insert<T: Serialize>(
    store: &dyn RowStore,
    table: &str,
    record: &T,
) -> Result<String, StoreError> {
    let value = serde_json::to_value(record).map_err(|e| StoreError::Decode {
        table: table.to_string(),
        detail: e.to_string(),
    })?;
    store.insert(table, value).await
}

pub async fn insert_forum(store: &dyn RowStore, forum: &NewForum) -> Result<String, StoreError> {
    insert(store, "forums", forum).await
}

pub async fn insert_topic(store: &dyn RowStore, topic: &NewTopic) -> Result<String, StoreError> {
    insert(store, "topics", topic).await
}

pub async fn insert_study_material(
    store: &dyn RowStore,
    material: &NewStudyMaterial,
) -> Result<String, StoreError> {
    insert(store, "study_materials", material).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_rows_decode_failure_names_table() {
        let store = MemoryStore::new();
        store.seed("forums", vec![json!({"id": "f1"})]); // missing required fields

        let result = forums(&store).await;
        match result {
            Err(StoreError::Decode { table, .. }) => assert_eq!(table, "forums"),
            other => panic!("expected decode error, got {:?}", other.map(|f| f.len())),
        }
    }

    #[tokio::test]
    async fn test_profiles_by_user_ids_empty_set_skips_store() {
        let store = MemoryStore::new();
        store.fail_table("profiles");

        // No ids means no lookup, so the armed outage must not trigger
        let profiles = profiles_by_user_ids(&store, &[]).await.unwrap();
        assert!(profiles.is_empty());
    }
}
