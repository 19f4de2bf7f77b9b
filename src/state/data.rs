/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the record sources and the UI layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single image in the gallery
///
/// Records are immutable once loaded. Filtering and sorting always work on
/// copies, never on the loaded collection itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    /// Unique record ID
    pub id: u64,
    /// Where the image lives (http(s) URL, file:// URL or local path)
    pub url: String,
    /// Display title
    pub title: String,
    /// Attribution label (e.g., "Reddit")
    pub source: String,
    /// When the image was collected
    pub uploaded_at: DateTime<Utc>,
}

impl ImageRecord {
    /// The text a search term is matched against, lower-cased
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.source).to_lowercase()
    }

    /// Caption shown under the enlarged image in the modal
    pub fn modal_caption(&self, date_format: &str) -> String {
        format!(
            "Source: {} | {}",
            self.source,
            self.uploaded_at.format(date_format)
        )
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::record;

    #[test]
    fn searchable_text_joins_title_and_source() {
        let r = record(1, "ChatGPT Meme", "Reddit", 15);
        assert_eq!(r.searchable_text(), "chatgpt meme reddit");
    }

    #[test]
    fn modal_caption_formats_date() {
        let r = record(1, "ChatGPT Meme", "Reddit", 15);
        assert_eq!(r.modal_caption("%-m/%-d/%Y"), "Source: Reddit | 1/15/2024");
    }

    #[test]
    fn deserializes_camel_case_json() {
        let json = r#"{
            "id": 7,
            "url": "https://example.com/7.png",
            "title": "Robot Humor",
            "source": "9GAG",
            "uploadedAt": "2024-01-13T00:00:00Z"
        }"#;
        let r: super::ImageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r, record(7, "Robot Humor", "9GAG", 13));
    }
}
