// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Float comparisons go through the `approx` macros re-exported here, since
//! zoom, pan and layout values accumulate rounding that `assert_eq!` trips on.

pub use approx::assert_abs_diff_eq;

use crate::gallery::DecodedImage;
use image_rs::RgbaImage;

/// Fully transparent image of the given size.
pub fn blank_image(width: u32, height: u32) -> DecodedImage {
    DecodedImage::from_rgba(RgbaImage::new(width, height))
}
