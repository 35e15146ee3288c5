/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the network layer and the UI layer.

use image::RgbaImage;

/// A decoded remote image held by the view model
///
/// Replaced wholesale on each successful fetch. There is no identity
/// and no history; at most one of these is held at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Tightly packed RGBA8 pixel data (width * height * 4 bytes)
    pub pixels: Vec<u8>,
}

impl FetchedImage {
    /// Wrap a decoded RGBA buffer from the `image` crate
    pub fn from_rgba(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }
}
