//! Record source backed by a JSON HTTP endpoint.
//!
//! Sends `GET {endpoint}?search=..&page=..&limit=..&sort=..` and expects a
//! body of the form `{ "records": [...] }` (the older `memes` key is also
//! accepted).

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::{RecordPage, RecordQuery, RecordSource};
use crate::error::{GalleryError, Result};

pub struct HttpSource {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    /// Query-string pairs for a request; empty search terms are omitted
    fn params(query: &RecordQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
            params.push(("search", search.to_string()));
        }
        if let Some(page) = query.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(sort) = query.sort {
            params.push(("sort", sort.as_str().to_string()));
        }
        params
    }
}

/// Parse an endpoint response body
pub fn parse_body(body: &str) -> Result<RecordPage> {
    Ok(serde_json::from_str(body)?)
}

impl RecordSource for HttpSource {
    fn name(&self) -> &str {
        &self.endpoint
    }

    fn fetch<'a>(
        &'a self,
        query: &'a RecordQuery,
    ) -> Pin<Box<dyn Future<Output = Result<RecordPage>> + Send + 'a>> {
        Box::pin(async move {
            let resp = self
                .client
                .get(&self.endpoint)
                .query(&Self::params(query))
                .send()
                .await?;

            if !resp.status().is_success() {
                return Err(GalleryError::Status(resp.status().as_u16()));
            }

            let body = resp.text().await?;
            let page = parse_body(&body)?;
            tracing::info!(endpoint = %self.endpoint, count = page.records.len(), "records fetched");
            Ok(page)
        })
    }
}
