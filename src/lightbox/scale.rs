// SPDX-License-Identifier: MPL-2.0
//! Lightbox zoom scale.
//!
//! A scale of 1.0 shows the image fitted to the window. [`ZoomLimits`] carries
//! the configured bounds and step; [`Scale`] can only be built through them,
//! so every value in circulation is already clamped.

use crate::config::{
    DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SCALE_STEP, MAX_SCALE_CEILING, MIN_SCALE_FLOOR,
};

/// Inclusive scale bounds plus the step used by keys and the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    min: f32,
    max: f32,
    step: f32,
}

impl ZoomLimits {
    /// Builds limits from raw (possibly hand-edited) values.
    ///
    /// Non-finite values fall back to the defaults, bounds are clamped to
    /// `[MIN_SCALE_FLOOR, MAX_SCALE_CEILING]` and an inverted range collapses
    /// onto its minimum.
    #[must_use]
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        let min = finite_or(min, DEFAULT_MIN_SCALE).clamp(MIN_SCALE_FLOOR, MAX_SCALE_CEILING);
        let max = finite_or(max, DEFAULT_MAX_SCALE)
            .clamp(MIN_SCALE_FLOOR, MAX_SCALE_CEILING)
            .max(min);
        let step = match finite_or(step, DEFAULT_SCALE_STEP) {
            s if s > 0.0 => s,
            _ => DEFAULT_SCALE_STEP,
        };
        Self { min, max, step }
    }

    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    #[must_use]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Clamps `value` into the bounds. NaN maps to the minimum.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE, DEFAULT_SCALE_STEP)
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Current zoom factor, always within the [`ZoomLimits`] it was made with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(f32);

impl Scale {
    #[must_use]
    pub fn new(value: f32, limits: &ZoomLimits) -> Self {
        Self(limits.clamp(value))
    }

    /// Scale shown when an image is first displayed.
    #[must_use]
    pub fn fitted(limits: &ZoomLimits) -> Self {
        Self::new(1.0, limits)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn step_in(self, limits: &ZoomLimits) -> Self {
        Self::new(self.0 + limits.step(), limits)
    }

    #[must_use]
    pub fn step_out(self, limits: &ZoomLimits) -> Self {
        Self::new(self.0 - limits.step(), limits)
    }

    /// Multiplies by the ratio of the new to the previous finger distance.
    ///
    /// A degenerate ratio (zero, negative or non-finite) leaves the scale
    /// unchanged.
    #[must_use]
    pub fn pinched(self, ratio: f32, limits: &ZoomLimits) -> Self {
        if ratio.is_finite() && ratio > 0.0 {
            Self::new(self.0 * ratio, limits)
        } else {
            self
        }
    }

    /// True when the image is enlarged past its fitted size.
    #[must_use]
    pub fn is_zoomed(self) -> bool {
        self.0 > 1.0
    }
}
