//! In-memory store fake for tests and offline runs
//!
//! Implements the same filter/order/limit contract as the REST client over
//! plain vectors. Column defaults the hosted store applies server-side
//! (generated `id`, `created_at` stamp) are mirrored here so insert-then-read
//! flows behave the same way.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use super::{BlobStore, Filter, Query, RowStore, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    failing: Mutex<HashSet<String>>,
    next_id: Mutex<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table with typed rows, preserving insertion order
    pub fn seed<T: Serialize>(&self, table: &str, rows: Vec<T>) {
        let mut tables = self.tables.lock().unwrap();
        let entries = tables.entry(table.to_string()).or_default();
        for row in rows {
            entries.push(serde_json::to_value(row).expect("seed row serializes"));
        }
    }

    /// Arm a simulated outage: every call touching `table` fails until
    /// [`MemoryStore::restore_table`] is called
    pub fn fail_table(&self, table: &str) {
        self.failing.lock().unwrap().insert(table.to_string());
    }

    pub fn restore_table(&self, table: &str) {
        self.failing.lock().unwrap().remove(table);
    }

    fn check_available(&self, table: &str, query_desc: &str) -> Result<(), StoreError> {
        if self.failing.lock().unwrap().contains(table) {
            return Err(StoreError::unavailable(
                table,
                format!("simulated outage ({})", query_desc),
            ));
        }
        Ok(())
    }
}

fn value_matches(actual: Option<&Value>, expected: &str) -> bool {
    match actual {
        Some(Value::String(s)) => s == expected,
        Some(other) => other.to_string() == expected,
        None => false,
    }
}

fn field_cmp(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), Some(_)) => Ordering::Greater,
        (Some(_), None | Some(Value::Null)) => Ordering::Less,
        (Some(x), Some(y)) => {
            if let (Some(xn), Some(yn)) = (x.as_f64(), y.as_f64()) {
                xn.partial_cmp(&yn).unwrap_or(Ordering::Equal)
            } else if let (Some(xs), Some(ys)) = (x.as_str(), y.as_str()) {
                xs.cmp(ys)
            } else {
                x.to_string().cmp(&y.to_string())
            }
        }
    }
}

#[async_trait]
impl RowStore for MemoryStore {
    async fn select(&self, table: &str, query: Query) -> Result<Vec<Value>, StoreError> {
        self.check_available(table, &query.describe())?;

        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<Value> = tables
            .get(table)
            .map(|rows| rows.clone())
            .unwrap_or_default();

        for filter in &query.filters {
            match filter {
                Filter::Eq(field, value) => {
                    rows.retain(|row| value_matches(row.get(*field), value));
                }
                Filter::In(field, values) => {
                    rows.retain(|row| values.iter().any(|v| value_matches(row.get(*field), v)));
                }
            }
        }

        // Stable sort keeps insertion order among equal keys, matching the
        // determinism the hosted store's keyset ordering gives us.
        let order_by = query.order_by;
        rows.sort_by(|a, b| {
            let cmp = field_cmp(a.get(order_by), b.get(order_by));
            if query.ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }

        Ok(rows)
    }

    async fn insert(&self, table: &str, record: Value) -> Result<String, StoreError> {
        self.check_available(table, "insert")?;

        let mut record = record;
        let obj = record.as_object_mut().ok_or_else(|| StoreError::Decode {
            table: table.to_string(),
            detail: "insert payload is not an object".to_string(),
        })?;

        let id = match obj.get("id").and_then(|id| id.as_str()) {
            Some(id) => id.to_string(),
            None => {
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                let id = format!("row-{}", next);
                obj.insert("id".to_string(), Value::String(id.clone()));
                id
            }
        };

        if !obj.contains_key("created_at") {
            obj.insert(
                "created_at".to_string(),
                Value::String(Utc::now().to_rfc3339()),
            );
        }

        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(record);

        Ok(id)
    }
}

/// In-memory blob store; uploads are addressed as `memory://bucket/path`
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blob(&self, bucket: &str, path: &str) -> Option<Vec<u8>> {
        self.blobs
            .lock()
            .unwrap()
            .get(&format!("{}/{}", bucket, path))
            .cloned()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(&self, bucket: &str, path: &str, bytes: Vec<u8>) -> Result<String, StoreError> {
        self.blobs
            .lock()
            .unwrap()
            .insert(format!("{}/{}", bucket, path), bytes);
        Ok(format!("memory://{}/{}", bucket, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_select_filter_order_limit() {
        let store = MemoryStore::new();
        store.seed(
            "topics",
            vec![
                json!({"id": "t1", "forum_id": "f1", "replies_count": 5}),
                json!({"id": "t2", "forum_id": "f2", "replies_count": 9}),
                json!({"id": "t3", "forum_id": "f1", "replies_count": 7}),
                json!({"id": "t4", "forum_id": "f1", "replies_count": 7}),
            ],
        );

        let rows = store
            .select(
                "topics",
                Query::order_by("replies_count", false)
                    .eq("forum_id", "f1")
                    .limit(2),
            )
            .await
            .unwrap();

        // t3 before t4: equal keys keep insertion order
        assert_eq!(rows[0]["id"], "t3");
        assert_eq!(rows[1]["id"], "t4");
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn test_select_unknown_table_is_empty() {
        let store = MemoryStore::new();
        let rows = store
            .select("forums", Query::order_by("created_at", true))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_simulated_outage() {
        let store = MemoryStore::new();
        store.fail_table("topics");

        let result = store
            .select("topics", Query::order_by("created_at", true))
            .await;
        assert!(matches!(
            result,
            Err(StoreError::RemoteUnavailable { .. })
        ));

        store.restore_table("topics");
        assert!(store
            .select("topics", Query::order_by("created_at", true))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_created_at() {
        let store = MemoryStore::new();
        let id = store
            .insert("forums", json!({"name": "Grammar"}))
            .await
            .unwrap();
        assert_eq!(id, "row-1");

        let rows = store
            .select("forums", Query::order_by("created_at", true))
            .await
            .unwrap();
        assert_eq!(rows[0]["id"], "row-1");
        assert!(rows[0].get("created_at").is_some());
    }

    #[tokio::test]
    async fn test_blob_upload_round_trip() {
        let blobs = MemoryBlobStore::new();
        let url = blobs
            .upload("study-materials", "guide.pdf", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(url, "memory://study-materials/guide.pdf");
        assert_eq!(blobs.blob("study-materials", "guide.pdf"), Some(vec![1, 2, 3]));
    }
}
