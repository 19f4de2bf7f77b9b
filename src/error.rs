/// Error types for the gallery
///
/// Every failure in the gallery is recoverable: record loads degrade to an
/// error message, image failures degrade to a placeholder, and config errors
/// degrade to defaults. Nothing here is meant to terminate the application.

use thiserror::Error;

/// All failures the gallery can observe
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Transport-level failure talking to the record endpoint or an image host
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The response body was not the JSON we expected
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Image bytes could not be decoded
    #[error("Image decode failed: {0}")]
    Image(#[from] image::ImageError),

    /// Local file access failed (local image paths, HTML export)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file exists but is malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A newer load superseded this one
    #[error("Request cancelled")]
    Cancelled,

    /// A background task panicked or was aborted
    #[error("Task join error: {0}")]
    Task(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_matches_user_facing_wording() {
        let err = GalleryError::Status(503);
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn read_missing() -> Result<Vec<u8>> {
            Ok(std::fs::read("/definitely/not/here.png")?)
        }
        assert!(matches!(read_missing(), Err(GalleryError::Io(_))));
    }
}
