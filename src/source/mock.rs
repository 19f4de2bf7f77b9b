//! Static record source backed by the catalog bundled into the binary.

use std::future::Future;
use std::pin::Pin;

use super::{RecordPage, RecordQuery, RecordSource};
use crate::error::Result;

const BUNDLED_CATALOG: &str = include_str!("../../assets/memes.json");

/// Serves a fixed JSON catalog regardless of the query.
pub struct StaticSource {
    name: String,
    catalog: String,
}

impl StaticSource {
    /// The catalog shipped with the application
    pub fn bundled() -> Self {
        Self {
            name: "bundled catalog".to_string(),
            catalog: BUNDLED_CATALOG.to_string(),
        }
    }

    /// A catalog from arbitrary JSON; invalid JSON surfaces as a load failure
    #[cfg(test)]
    pub fn from_json(name: impl Into<String>, catalog: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalog: catalog.into(),
        }
    }
}

impl RecordSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch<'a>(
        &'a self,
        _query: &'a RecordQuery,
    ) -> Pin<Box<dyn Future<Output = Result<RecordPage>> + Send + 'a>> {
        Box::pin(async move {
            let page: RecordPage = serde_json::from_str(&self.catalog)?;
            tracing::debug!(source = %self.name, count = page.records.len(), "catalog parsed");
            Ok(page)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GalleryError;

    #[tokio::test]
    async fn bundled_catalog_holds_three_records() {
        let page = StaticSource::bundled()
            .fetch(&RecordQuery::default())
            .await
            .unwrap();
        let titles: Vec<_> = page.records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["ChatGPT Meme", "DALL-E Art", "Robot Humor"]);
    }

    #[tokio::test]
    async fn invalid_catalog_is_a_decode_error() {
        let source = StaticSource::from_json("broken", "{ not json");
        let result = source.fetch(&RecordQuery::default()).await;
        assert!(matches!(result, Err(GalleryError::Decode(_))));
    }
}
