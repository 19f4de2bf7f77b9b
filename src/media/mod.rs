/// Card image loading module
///
/// This module handles:
/// - Fetching image bytes (HTTP or local files)
/// - Decoding and generating card thumbnails
/// - Substituting a placeholder when an image cannot be shown
/// - Caching decoded images per record across reloads

pub mod cache;
pub mod fetch;
pub mod placeholder;

use iced::widget::image::Handle;

/// Accessible text used when an image is replaced by the placeholder
pub const PLACEHOLDER_ALT: &str = "Image not available";

/// A decoded image ready for the card grid and the modal
#[derive(Debug, Clone)]
pub struct CardImage {
    /// Downscaled version for the grid
    pub thumbnail: Handle,
    /// Full-size version for the modal
    pub full: Handle,
    /// Accessible description (the record title, or the placeholder text)
    pub alt: String,
    /// Set when the image could not be fetched or decoded
    pub is_placeholder: bool,
}
