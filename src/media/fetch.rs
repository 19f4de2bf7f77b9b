use std::path::PathBuf;

use iced::widget::image::Handle;
use image::{imageops::FilterType, RgbaImage};

use super::{placeholder, CardImage};
use crate::error::{GalleryError, Result};
use crate::state::data::ImageRecord;

/// Longest edge of card thumbnails
const THUMBNAIL_SIZE: u32 = 400;

/// Decoded pixels: (full size, thumbnail)
type Decoded = (RgbaImage, RgbaImage);

/// Resolve non-HTTP image locations to a local path
fn local_path(url: &str) -> Option<PathBuf> {
    if let Some(rest) = url.strip_prefix("file://") {
        return Some(PathBuf::from(rest));
    }
    if url.starts_with("http://") || url.starts_with("https://") {
        None
    } else {
        Some(PathBuf::from(url))
    }
}

/// Fetch the raw bytes behind an image location
pub async fn fetch_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    if let Some(path) = local_path(url) {
        return Ok(tokio::fs::read(path).await?);
    }

    let resp = client.get(url).send().await?;
    if !resp.status().is_success() {
        return Err(GalleryError::Status(resp.status().as_u16()));
    }
    Ok(resp.bytes().await?.to_vec())
}

/// Decode image bytes into full-size and thumbnail pixels
pub fn decode(bytes: &[u8]) -> Result<Decoded> {
    let img = image::load_from_memory(bytes)?;
    let thumbnail = img
        .resize(THUMBNAIL_SIZE, THUMBNAIL_SIZE, FilterType::Lanczos3)
        .to_rgba8();
    Ok((img.to_rgba8(), thumbnail))
}

async fn try_load(client: &reqwest::Client, url: &str) -> Result<Decoded> {
    let bytes = fetch_bytes(client, url).await?;
    // Decoding and resizing are CPU-bound
    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| GalleryError::Task(e.to_string()))?
}

fn to_handle(pixels: RgbaImage) -> Handle {
    Handle::from_rgba(pixels.width(), pixels.height(), pixels.into_raw())
}

/// Load the image for a card. Never fails: anything that goes wrong is
/// logged and replaced by the placeholder.
pub async fn load_card_image(client: reqwest::Client, record: ImageRecord) -> CardImage {
    match try_load(&client, &record.url).await {
        Ok((full, thumbnail)) => CardImage {
            thumbnail: to_handle(thumbnail),
            full: to_handle(full),
            alt: record.title,
            is_placeholder: false,
        },
        Err(e) => {
            tracing::warn!(
                id = record.id,
                url = %record.url,
                error = %e,
                "image unavailable, using placeholder"
            );
            placeholder::card_image()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::record;
    use image::{DynamicImage, ImageFormat, Rgba};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    fn record_at(url: String) -> ImageRecord {
        ImageRecord {
            url,
            ..record(1, "ChatGPT Meme", "Reddit", 15)
        }
    }

    #[test]
    fn local_paths_are_recognized() {
        assert_eq!(local_path("file:///tmp/a.png"), Some(PathBuf::from("/tmp/a.png")));
        assert_eq!(local_path("memes/a.png"), Some(PathBuf::from("memes/a.png")));
        assert_eq!(local_path("https://example.com/a.png"), None);
    }

    #[test]
    fn decode_keeps_full_size_and_shrinks_thumbnail() {
        let (full, thumbnail) = decode(&png_bytes(800, 400)).unwrap();
        assert_eq!(full.dimensions(), (800, 400));
        assert_eq!(thumbnail.dimensions(), (400, 200));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode(b"definitely not an image"), Err(GalleryError::Image(_))));
    }

    #[tokio::test]
    async fn loads_local_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meme.png");
        std::fs::write(&path, png_bytes(40, 40)).unwrap();

        let card = load_card_image(reqwest::Client::new(), record_at(path.display().to_string())).await;
        assert!(!card.is_placeholder);
        assert_eq!(card.alt, "ChatGPT Meme");
    }

    #[tokio::test]
    async fn broken_image_falls_back_to_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"<html>not found</html>").unwrap();

        let card = load_card_image(reqwest::Client::new(), record_at(path.display().to_string())).await;
        assert!(card.is_placeholder);
        assert_eq!(card.alt, "Image not available");
    }

    #[tokio::test]
    async fn missing_file_falls_back_to_placeholder() {
        let card = load_card_image(
            reqwest::Client::new(),
            record_at("file:///no/such/meme.png".to_string()),
        )
        .await;
        assert!(card.is_placeholder);
    }
}
