// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Server**: where the gallery lives
//! - **Zoom**: lightbox scale bounds and step
//! - **Touch**: swipe navigation distance
//! - **Lazy loading**: observer margin, threshold and thumbnail styling
//! - **Grid**: tile geometry used when the index omits it

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Gallery server queried when neither the CLI nor the config names one.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8989";

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale increment applied by `+`/`-` and one wheel notch.
pub const DEFAULT_SCALE_STEP: f32 = 0.33;

/// Smallest lightbox scale (1.0 = image fitted to the window).
pub const DEFAULT_MIN_SCALE: f32 = 1.0;

/// Largest lightbox scale.
pub const DEFAULT_MAX_SCALE: f32 = 10.0;

/// Lower bound accepted for a configured minimum scale.
pub const MIN_SCALE_FLOOR: f32 = 0.1;

/// Upper bound accepted for a configured maximum scale.
pub const MAX_SCALE_CEILING: f32 = 50.0;

// ==========================================================================
// Touch Defaults
// ==========================================================================

/// Horizontal finger travel (logical pixels) that turns a drag into a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;

// ==========================================================================
// Lazy Loading Defaults
// ==========================================================================

/// Vertical margin added above and below the grid viewport before a
/// thumbnail counts as visible.
pub const DEFAULT_ROOT_MARGIN: f32 = 100.0;

/// Fraction of a tile's area that must be inside the expanded viewport.
pub const DEFAULT_VISIBILITY_THRESHOLD: f32 = 0.1;

/// A thumbnail is drawn with nearest-neighbour filtering when its natural
/// width times this factor is still below the display width.
pub const DEFAULT_PIXELATE_FACTOR: u32 = 3;

/// Fraction of the window height a thumbnail may occupy before it is cropped.
pub const DEFAULT_MAX_HEIGHT_FRACTION: f32 = 0.85;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Tile width used when the gallery index does not carry `data-width`.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 250;
