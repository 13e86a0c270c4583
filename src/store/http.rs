//! REST client for the hosted row store
//!
//! The store speaks a PostgREST-style dialect: one endpoint per table with
//! filter, order and limit encoded in the query string, and an object
//! endpoint for blob uploads.
//!
//! Endpoint shapes:
//! - `GET  {base}/rest/v1/{table}?select=*&order=col.desc&limit=N&col=eq.V`
//! - `POST {base}/rest/v1/{table}` (returns the inserted representation)
//! - `POST {base}/storage/v1/object/{bucket}/{path}`

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{BlobStore, Filter, Query, RowStore, StoreError};
use crate::config::FeedConfig;

/// HTTP implementation of [`RowStore`]
pub struct HttpRowStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpRowStore {
    pub fn new(config: &FeedConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.store_url.trim_end_matches('/').to_string(),
            api_key: config.store_key.clone(),
        })
    }

    fn rest_url(&self, table: &str, query: &Query) -> String {
        let direction = if query.ascending { "asc" } else { "desc" };
        let mut url = format!(
            "{}/rest/v1/{}?select=*&order={}.{}",
            self.base_url, table, query.order_by, direction
        );

        for filter in &query.filters {
            match filter {
                Filter::Eq(field, value) => {
                    url.push_str(&format!("&{}=eq.{}", field, value));
                }
                Filter::In(field, values) => {
                    url.push_str(&format!("&{}=in.({})", field, values.join(",")));
                }
            }
        }

        if let Some(limit) = query.limit {
            url.push_str(&format!("&limit={}", limit));
        }

        url
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }
}

#[async_trait]
impl RowStore for HttpRowStore {
    async fn select(&self, table: &str, query: Query) -> Result<Vec<Value>, StoreError> {
        let url = self.rest_url(table, &query);
        let filter_desc = query.describe();

        let response = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .map_err(|e| StoreError::unavailable(table, format!("{} ({})", e, filter_desc)))?;

        if !response.status().is_success() {
            return Err(StoreError::unavailable(
                table,
                format!("status {} ({})", response.status(), filter_desc),
            ));
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| StoreError::unavailable(table, format!("{} ({})", e, filter_desc)))
    }

    async fn insert(&self, table: &str, record: Value) -> Result<String, StoreError> {
        let url = format!("{}/rest/v1/{}", self.base_url, table);

        let response = self
            .authorized(self.client.post(&url))
            .header("Prefer", "return=representation")
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::unavailable(table, e))?;

        if !response.status().is_success() {
            return Err(StoreError::unavailable(
                table,
                format!("status {}", response.status()),
            ));
        }

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| StoreError::unavailable(table, e))?;

        rows.first()
            .and_then(|row| row.get("id"))
            .and_then(|id| id.as_str())
            .map(|id| id.to_string())
            .ok_or_else(|| StoreError::Decode {
                table: table.to_string(),
                detail: "insert response carried no id".to_string(),
            })
    }
}

/// HTTP implementation of [`BlobStore`]
///
/// Uploads land under `{bucket}/{path}`; the returned URL is the store's
/// public-object address for that path.
pub struct HttpBlobStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpBlobStore {
    pub fn new(config: &FeedConfig) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| StoreError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.store_url.trim_end_matches('/').to_string(),
            api_key: config.store_key.clone(),
        })
    }
}

#[async_trait]
impl BlobStore for HttpBlobStore {
    async fn upload(&self, bucket: &str, path: &str, bytes: Vec<u8>) -> Result<String, StoreError> {
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url, bucket, path);

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .map_err(|e| StoreError::unavailable(bucket, e))?;

        if !response.status().is_success() {
            return Err(StoreError::unavailable(
                bucket,
                format!("upload status {}", response.status()),
            ));
        }

        Ok(format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, bucket, path
        ))
    }
}
