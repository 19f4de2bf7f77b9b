//! Record sources the gallery can load from.
//!
//! A source answers one request/response contract: given a [`RecordQuery`]
//! it returns a [`RecordPage`] or a recoverable [`GalleryError`]. The static
//! catalog ignores the query; the HTTP source forwards it to the endpoint.

pub mod http;
pub mod mock;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;

use crate::config::Config;
use crate::error::Result;
use crate::state::data::ImageRecord;
use crate::state::view::SortOrder;

pub use http::HttpSource;
pub use mock::StaticSource;

/// Parameters forwarded to a record source
///
/// The gallery currently loads the whole collection and sends none of these;
/// they are for endpoints that filter or page on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    pub search: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
    pub sort: Option<SortOrder>,
}

/// A source's answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RecordPage {
    #[serde(default, alias = "memes")]
    pub records: Vec<ImageRecord>,
}

/// Something the gallery can fetch records from.
pub trait RecordSource: Send + Sync {
    /// Human-readable name used in logs
    fn name(&self) -> &str;

    fn fetch<'a>(
        &'a self,
        query: &'a RecordQuery,
    ) -> Pin<Box<dyn Future<Output = Result<RecordPage>> + Send + 'a>>;
}

/// Pick the source described by the configuration
pub fn from_config(config: &Config) -> Result<Arc<dyn RecordSource>> {
    match config.endpoint.as_deref() {
        Some(endpoint) if !endpoint.trim().is_empty() => {
            let source = HttpSource::new(endpoint.trim(), config.request_timeout())?;
            Ok(Arc::new(source))
        }
        _ => Ok(Arc::new(StaticSource::bundled())),
    }
}
