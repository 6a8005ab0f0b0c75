// SPDX-License-Identifier: MPL-2.0
//! Visibility-driven thumbnail loading.
//!
//! Tiles are observed from the moment the index is loaded. Each time the grid
//! scrolls or the window resizes, [`LazyLoadObserver::take_visible`] reports
//! the tiles that entered the grid viewport (grown vertically by the root
//! margin) with at least `threshold` of their area, and stops observing them.
//! A tile is therefore reported at most once, however often it scrolls back
//! into view.

use crate::config::{DEFAULT_ROOT_MARGIN, DEFAULT_VISIBILITY_THRESHOLD};
use crate::gallery::ImageId;
use iced::Rectangle;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    root_margin: f32,
    threshold: f32,
}

impl ObserverOptions {
    /// `root_margin` in logical pixels (above and below only), `threshold`
    /// as a fraction of the tile area. Out-of-range values are corrected.
    #[must_use]
    pub fn new(root_margin: f32, threshold: f32) -> Self {
        let root_margin = if root_margin.is_finite() && root_margin >= 0.0 {
            root_margin
        } else {
            DEFAULT_ROOT_MARGIN
        };
        let threshold = if threshold.is_nan() {
            DEFAULT_VISIBILITY_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        Self {
            root_margin,
            threshold,
        }
    }

    #[must_use]
    pub fn root_margin(&self) -> f32 {
        self.root_margin
    }

    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Viewport grown by the root margin on the vertical axis.
    #[must_use]
    pub fn expand(&self, viewport: Rectangle) -> Rectangle {
        Rectangle {
            x: viewport.x,
            y: viewport.y - self.root_margin,
            width: viewport.width,
            height: viewport.height + 2.0 * self.root_margin,
        }
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_MARGIN, DEFAULT_VISIBILITY_THRESHOLD)
    }
}

/// Share of `tile` lying inside `root`, in `0.0..=1.0`.
///
/// A zero-area tile counts as fully visible when it lies within `root`.
#[must_use]
pub fn intersection_ratio(tile: Rectangle, root: Rectangle) -> f32 {
    let left = tile.x.max(root.x);
    let top = tile.y.max(root.y);
    let right = (tile.x + tile.width).min(root.x + root.width);
    let bottom = (tile.y + tile.height).min(root.y + root.height);

    if right < left || bottom < top {
        return 0.0;
    }

    let area = tile.width * tile.height;
    if area <= 0.0 {
        return 1.0;
    }
    ((right - left) * (bottom - top) / area).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Default)]
pub struct LazyLoadObserver {
    options: ObserverOptions,
    observed: HashSet<ImageId>,
}

impl LazyLoadObserver {
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            observed: HashSet::new(),
        }
    }

    pub fn observe_all(&mut self, ids: impl IntoIterator<Item = ImageId>) {
        self.observed.extend(ids);
    }

    #[must_use]
    pub fn is_observing(&self, id: ImageId) -> bool {
        self.observed.contains(&id)
    }

    /// Returns the observed tiles that are now visible, in the order given,
    /// and stops observing them.
    ///
    /// `viewport` and the tile rectangles must share one coordinate space
    /// (the grid content in practice).
    pub fn take_visible(
        &mut self,
        viewport: Rectangle,
        tiles: impl IntoIterator<Item = (ImageId, Rectangle)>,
    ) -> Vec<ImageId> {
        if self.observed.is_empty() {
            return Vec::new();
        }
        let root = self.options.expand(viewport);
        let threshold = self.options.threshold;

        let visible: Vec<ImageId> = tiles
            .into_iter()
            .filter(|(id, _)| self.observed.contains(id))
            .filter(|(_, tile)| {
                let ratio = intersection_ratio(*tile, root);
                ratio > 0.0 && ratio >= threshold
            })
            .map(|(id, _)| id)
            .collect();

        for id in &visible {
            self.observed.remove(id);
        }
        visible
    }
}
