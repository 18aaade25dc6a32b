// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for card faces (PNG, JPEG, GIF, BMP).

use crate::error::Result;
use iced::widget::image;
use std::path::Path;

/// A decoded card face image together with its Iced handle.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }
}

/// Loads an image from the given path, decoding it to RGBA.
///
/// Unsupported formats and corrupt files are reported as [`Error::Image`].
pub fn load_image(path: &Path) -> Result<ImageData> {
    let decoded = image_rs::open(path)?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(ImageData::from_rgba(width, height, rgba.into_vec()))
}
