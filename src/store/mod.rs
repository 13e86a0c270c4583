//! Thin client for the remote row store
//!
//! The store is a collection-oriented HTTP service exposing per-table
//! read/insert with filter, order and limit clauses. Everything above this
//! module talks to the [`RowStore`] trait so the HTTP client can be swapped
//! for the in-memory store in tests.
//!
//! ## Module Organization
//!
//! - `http` - REST implementations against a hosted store
//! - `memory` - in-memory fake for tests and offline runs

pub mod http;
pub mod memory;

// Re-export commonly used types
pub use http::{HttpBlobStore, HttpRowStore};
pub use memory::{MemoryBlobStore, MemoryStore};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by store implementations
///
/// Transport failures and collaborator timeouts both map to
/// `RemoteUnavailable`; the triggering table is attached for diagnostics.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("remote store unavailable ({table}): {detail}")]
    RemoteUnavailable { table: String, detail: String },

    #[error("malformed {table} row: {detail}")]
    Decode { table: String, detail: String },

    #[error("store configuration error: {0}")]
    Config(String),
}

impl StoreError {
    pub fn unavailable(table: &str, detail: impl ToString) -> Self {
        StoreError::RemoteUnavailable {
            table: table.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// A single filter clause
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Column equals value
    Eq(&'static str, String),
    /// Column is one of the given values
    In(&'static str, Vec<String>),
}

/// Declarative read request: filters, order and limit
///
/// `order_by` must name a column of the target table; the result follows it
/// exactly, no implicit re-sorting happens on top.
#[derive(Debug, Clone)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order_by: &'static str,
    pub ascending: bool,
    pub limit: Option<usize>,
}

impl Query {
    pub fn order_by(field: &'static str, ascending: bool) -> Self {
        Self {
            filters: Vec::new(),
            order_by: field,
            ascending,
            limit: None,
        }
    }

    pub fn eq(mut self, field: &'static str, value: impl ToString) -> Self {
        self.filters.push(Filter::Eq(field, value.to_string()));
        self
    }

    pub fn any_of(mut self, field: &'static str, values: Vec<String>) -> Self {
        self.filters.push(Filter::In(field, values));
        self
    }

    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Human-readable filter summary, attached to diagnostics
    pub fn describe(&self) -> String {
        if self.filters.is_empty() {
            return "no filter".to_string();
        }
        self.filters
            .iter()
            .map(|f| match f {
                Filter::Eq(field, value) => format!("{}={}", field, value),
                Filter::In(field, values) => format!("{} in ({})", field, values.join(",")),
            })
            .collect::<Vec<_>>()
            .join(" and ")
    }
}

/// Read/insert access to one remote table
///
/// Rows travel as raw JSON values; typed decoding happens in the entity
/// fetchers so one trait covers every table.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Fetch rows matching the query, in the requested order
    ///
    /// An empty result is not an error; the caller decides fallback policy.
    async fn select(&self, table: &str, query: Query) -> Result<Vec<Value>, StoreError>;

    /// Insert a record, returning the id assigned by the store
    async fn insert(&self, table: &str, record: Value) -> Result<String, StoreError>;
}

/// Upload access to the object-storage collaborator
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload bytes under `bucket/path` and return the public URL
    async fn upload(&self, bucket: &str, path: &str, bytes: Vec<u8>) -> Result<String, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = Query::order_by("created_at", false)
            .eq("forum_id", "f1")
            .limit(10);

        assert_eq!(query.order_by, "created_at");
        assert!(!query.ascending);
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.filters, vec![Filter::Eq("forum_id", "f1".to_string())]);
    }

    #[test]
    fn test_query_describe() {
        let query = Query::order_by("created_at", true);
        assert_eq!(query.describe(), "no filter");

        let query = Query::order_by("created_at", true)
            .eq("is_active", "true")
            .any_of("user_id", vec!["u1".to_string(), "u2".to_string()]);
        assert_eq!(query.describe(), "is_active=true and user_id in (u1,u2)");
    }
}
