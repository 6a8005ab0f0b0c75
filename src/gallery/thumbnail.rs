// SPDX-License-Identifier: MPL-2.0
//! Thumbnail tiles and their loading state.

use super::decoded::DecodedImage;
use super::index::{GalleryIndex, ImageId};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum ThumbnailState {
    /// Not yet visible.
    Pending,
    /// Fetch in flight.
    Requested,
    Loaded(LoadedThumbnail),
    /// Fetch failed; the placeholder stays.
    Failed,
}

#[derive(Debug, Clone)]
pub struct LoadedThumbnail {
    pub image: DecodedImage,
    /// Draw with nearest-neighbour filtering.
    pub pixelated: bool,
}

impl LoadedThumbnail {
    /// Builds the loaded tile, deciding pixelation: an image whose natural
    /// width times `pixelate_factor` is still narrower than the tile is
    /// enlarged so much that smoothing would only blur it.
    #[must_use]
    pub fn new(image: DecodedImage, display_width: u32, pixelate_factor: u32) -> Self {
        let pixelated =
            u64::from(image.width) * u64::from(pixelate_factor) < u64::from(display_width);
        Self { image, pixelated }
    }

    /// Height of the image drawn `display_width` wide.
    #[must_use]
    pub fn rendered_height(&self, display_width: f32) -> f32 {
        if self.image.width == 0 {
            return 0.0;
        }
        display_width * self.image.height as f32 / self.image.width as f32
    }
}

/// Height at which a loaded thumbnail gets clipped with a fade, if any.
///
/// Only applies when the gallery asked for it (`fit`) and the drawn image
/// is taller than `max_height_fraction` of the window.
#[must_use]
pub fn crop_height(
    rendered_height: f32,
    fit: bool,
    window_height: f32,
    max_height_fraction: f32,
) -> Option<f32> {
    let max_height = window_height * max_height_fraction;
    (fit && max_height > 0.0 && rendered_height > max_height).then_some(max_height)
}

/// One entry per thumbnail of the index. Entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct ThumbnailStore {
    entries: HashMap<ImageId, ThumbnailState>,
}

impl ThumbnailStore {
    #[must_use]
    pub fn from_index(index: &GalleryIndex) -> Self {
        Self {
            entries: index
                .thumbnails()
                .map(|item| (item.id, ThumbnailState::Pending))
                .collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: ImageId) -> Option<&ThumbnailState> {
        self.entries.get(&id)
    }

    /// Moves a pending tile to `Requested`. Returns false for unknown tiles
    /// and tiles that were already requested.
    pub fn mark_requested(&mut self, id: ImageId) -> bool {
        match self.entries.get_mut(&id) {
            Some(state @ ThumbnailState::Pending) => {
                *state = ThumbnailState::Requested;
                true
            }
            _ => false,
        }
    }

    pub fn finish(&mut self, id: ImageId, outcome: Option<LoadedThumbnail>) {
        if let Some(state) = self.entries.get_mut(&id) {
            *state = match outcome {
                Some(loaded) => ThumbnailState::Loaded(loaded),
                None => ThumbnailState::Failed,
            };
        }
    }

    #[must_use]
    pub fn loaded(&self, id: ImageId) -> Option<&LoadedThumbnail> {
        match self.entries.get(&id) {
            Some(ThumbnailState::Loaded(loaded)) => Some(loaded),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loaded(&self, id: ImageId) -> bool {
        self.loaded(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, blank_image as decoded};

    fn index() -> GalleryIndex {
        GalleryIndex::parse(
            r#"<body data-width="250"><ul class="flex"><li><img data-id="1" /><span class="name">a</span></li><li><img data-id="2" /><span class="name">b</span></li></ul></body>"#,
        )
        .expect("index parses")
    }

    #[test]
    fn small_images_are_pixelated() {
        assert!(LoadedThumbnail::new(decoded(80, 80), 250, 3).pixelated);
        assert!(!LoadedThumbnail::new(decoded(84, 84), 250, 3).pixelated);
        assert!(!LoadedThumbnail::new(decoded(400, 300), 250, 3).pixelated);
    }

    #[test]
    fn rendered_height_keeps_aspect_ratio() {
        let loaded = LoadedThumbnail::new(decoded(500, 1000), 250, 3);
        assert_abs_diff_eq!(loaded.rendered_height(250.0), 500.0);
    }

    #[test]
    fn crop_applies_only_with_fit_and_tall_images() {
        assert_eq!(crop_height(900.0, true, 1000.0, 0.85), Some(850.0));
        assert_eq!(crop_height(900.0, false, 1000.0, 0.85), None);
        assert_eq!(crop_height(800.0, true, 1000.0, 0.85), None);
    }

    #[test]
    fn each_tile_is_requested_once() {
        let mut store = ThumbnailStore::from_index(&index());
        assert!(store.mark_requested(ImageId::new(1)));
        assert!(!store.mark_requested(ImageId::new(1)));
        assert!(!store.mark_requested(ImageId::new(99)));

        store.finish(ImageId::new(1), None);
        assert!(matches!(store.get(ImageId::new(1)), Some(ThumbnailState::Failed)));
        assert!(!store.mark_requested(ImageId::new(1)));
    }

    #[test]
    fn finished_tiles_are_loaded() {
        let mut store = ThumbnailStore::from_index(&index());
        store.mark_requested(ImageId::new(2));
        store.finish(
            ImageId::new(2),
            Some(LoadedThumbnail::new(decoded(10, 10), 250, 3)),
        );
        assert!(store.is_loaded(ImageId::new(2)));
        assert!(!store.is_loaded(ImageId::new(1)));
    }
}
