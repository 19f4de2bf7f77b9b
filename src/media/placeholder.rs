use iced::widget::image::Handle;
use image::{Rgba, RgbaImage};

use super::{CardImage, PLACEHOLDER_ALT};

/// Size of the generated placeholder (square)
const PLACEHOLDER_SIZE: u32 = 400;
const BORDER: u32 = 6;

const BACKGROUND: Rgba<u8> = Rgba([0xf5, 0xf5, 0xf5, 0xff]);
const FOREGROUND: Rgba<u8> = Rgba([0x99, 0x99, 0x99, 0xff]);

/// Light grey square with a darker frame and diagonal cross
pub fn placeholder_pixels() -> RgbaImage {
    let size = PLACEHOLDER_SIZE;
    RgbaImage::from_fn(size, size, |x, y| {
        let on_border = x < BORDER || y < BORDER || x >= size - BORDER || y >= size - BORDER;
        let on_diagonal = x.abs_diff(y) < 2 || x.abs_diff(size - 1 - y) < 2;
        if on_border || on_diagonal {
            FOREGROUND
        } else {
            BACKGROUND
        }
    })
}

/// Card image shown in place of anything that failed to load
pub fn card_image() -> CardImage {
    let pixels = placeholder_pixels();
    let handle = Handle::from_rgba(pixels.width(), pixels.height(), pixels.into_raw());
    CardImage {
        thumbnail: handle.clone(),
        full: handle,
        alt: PLACEHOLDER_ALT.to_string(),
        is_placeholder: true,
    }
}
