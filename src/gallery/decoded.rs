// SPDX-License-Identifier: MPL-2.0
//! Decoded images ready to hand to Iced.

use crate::error::Result;
use crate::lightbox::RotationAngle;
use iced::widget::image;
use iced::Size;
use image_rs::{imageops, RgbaImage};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Kept so rotated copies can be produced without re-decoding.
    pixels: Arc<RgbaImage>,
}

impl DecodedImage {
    /// Decodes any format supported by the `image` crate.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Decode`] if the bytes are not an image.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image_rs::load_from_memory(bytes)?;
        Ok(Self::from_rgba(decoded.to_rgba8()))
    }

    #[must_use]
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        let (width, height) = pixels.dimensions();
        let handle = image::Handle::from_rgba(width, height, pixels.as_raw().clone());
        Self {
            handle,
            width,
            height,
            pixels: Arc::new(pixels),
        }
    }

    /// Natural size in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Returns a copy turned clockwise by `angle`; 0° shares the pixels.
    #[must_use]
    pub fn rotated(&self, angle: RotationAngle) -> Self {
        let pixels = &*self.pixels;
        match angle.degrees() {
            90 => Self::from_rgba(imageops::rotate90(pixels)),
            180 => Self::from_rgba(imageops::rotate180(pixels)),
            270 => Self::from_rgba(imageops::rotate270(pixels)),
            _ => self.clone(),
        }
    }
}
