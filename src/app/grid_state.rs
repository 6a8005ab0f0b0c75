// SPDX-License-Identifier: MPL-2.0
//! Gallery grid bookkeeping: the loaded index, thumbnail states, the layout
//! derived from them and the lazy-load observer watching that layout.

use crate::gallery::{GalleryIndex, ImageId, ThumbnailStore};
use crate::lazy_load::{LazyLoadObserver, ObserverOptions};
use crate::ui::design_tokens::sizing;
use crate::ui::grid::{GridLayout, LayoutParams};
use iced::widget::scrollable::RelativeOffset;
use iced::{Point, Rectangle, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    /// i18n key of the failure shown in place of the grid.
    Failed(&'static str),
}

#[derive(Debug)]
pub struct GridState {
    pub status: LoadStatus,
    pub index: GalleryIndex,
    pub thumbnails: ThumbnailStore,
    pub layout: GridLayout,
    observer: LazyLoadObserver,
    options: ObserverOptions,
    /// Size of the scrollable area below the top bar.
    area: Size,
    window_height: f32,
    max_height_fraction: f32,
    scroll_y: f32,
}

impl GridState {
    #[must_use]
    pub fn new(options: ObserverOptions, max_height_fraction: f32) -> Self {
        Self {
            status: LoadStatus::Loading,
            index: GalleryIndex::default(),
            thumbnails: ThumbnailStore::default(),
            layout: GridLayout::default(),
            observer: LazyLoadObserver::new(options),
            options,
            area: Size::ZERO,
            window_height: 0.0,
            max_height_fraction,
            scroll_y: 0.0,
        }
    }

    /// Replaces the gallery with a freshly loaded index. Every tile starts
    /// pending and observed.
    pub fn load(&mut self, index: GalleryIndex) {
        self.thumbnails = ThumbnailStore::from_index(&index);
        self.observer = LazyLoadObserver::new(self.options);
        self.observer.observe_all(index.thumbnails().map(|item| item.id));
        self.index = index;
        self.status = LoadStatus::Ready;
        self.scroll_y = 0.0;
        self.relayout();
    }

    pub fn fail(&mut self, key: &'static str) {
        self.status = LoadStatus::Failed(key);
    }

    pub fn set_loading(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub fn resize(&mut self, window: Size) {
        self.window_height = window.height;
        self.area = Size::new(
            window.width,
            (window.height - sizing::TOP_BAR_HEIGHT).max(0.0),
        );
        self.relayout();
    }

    /// Records the scrollable's reported viewport.
    pub fn scrolled(&mut self, bounds: Size, offset_y: f32) {
        self.scroll_y = offset_y.max(0.0);
        if bounds.width > 0.0 && bounds.height > 0.0 && bounds != self.area {
            self.area = bounds;
            self.relayout();
        }
    }

    pub fn relayout(&mut self) {
        self.layout = GridLayout::compute(
            &self.index,
            &self.thumbnails,
            LayoutParams {
                area: self.area,
                window_height: self.window_height,
                max_height_fraction: self.max_height_fraction,
            },
        );
    }

    /// Visible part of the grid content.
    #[must_use]
    pub fn viewport(&self) -> Rectangle {
        Rectangle::new(Point::new(0.0, self.scroll_y), self.area)
    }

    /// Tiles that just became visible, marked as requested. Each id is
    /// returned at most once for the lifetime of the loaded index.
    pub fn take_visible(&mut self) -> Vec<ImageId> {
        if self.area.height <= 0.0 {
            return Vec::new();
        }
        let viewport = self.viewport();
        let mut visible = self
            .observer
            .take_visible(viewport, self.layout.tile_rects());
        visible.retain(|id| self.thumbnails.mark_requested(*id));
        visible
    }

    fn max_scroll(&self) -> f32 {
        (self.layout.content_height - self.area.height).max(0.0)
    }

    /// Relative scroll target for content offset `y`; also records the
    /// offset, since programmatic snaps are not echoed back reliably.
    pub fn scroll_target(&mut self, y: f32) -> RelativeOffset {
        let max = self.max_scroll();
        self.scroll_y = y.clamp(0.0, max);
        RelativeOffset {
            x: 0.0,
            y: if max > 0.0 { self.scroll_y / max } else { 0.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn index(count: u32) -> GalleryIndex {
        let items: String = (1..=count)
            .map(|id| format!(r#"<li><img title="t{id}" data-id="{id}"/><span class="name">n{id}</span></li>"#))
            .collect();
        GalleryIndex::parse(&format!(
            r#"<body data-width="100" data-fit="false"><ul class="flex">{items}</ul></body>"#
        ))
        .expect("valid index")
    }

    fn loaded_grid(count: u32) -> GridState {
        let mut grid = GridState::new(ObserverOptions::default(), 0.85);
        grid.resize(Size::new(
            // one column of 100px tiles
            150.0,
            sizing::TOP_BAR_HEIGHT + 300.0,
        ));
        grid.load(index(count));
        grid
    }

    #[test]
    fn only_tiles_near_viewport_are_requested() {
        let mut grid = loaded_grid(20);
        let first = grid.take_visible();
        assert!(!first.is_empty());
        assert!(first.len() < 20);
        assert!(first.contains(&ImageId::new(1)));
    }

    #[test]
    fn tiles_are_requested_once() {
        let mut grid = loaded_grid(5);
        let first = grid.take_visible();
        assert!(!first.is_empty());
        assert!(grid.take_visible().is_empty());

        grid.scrolled(Size::new(150.0, 300.0), 0.0);
        assert!(grid.take_visible().is_empty());
    }

    #[test]
    fn scrolling_reveals_more_tiles() {
        let mut grid = loaded_grid(20);
        let first = grid.take_visible();
        grid.scrolled(Size::new(150.0, 300.0), 1000.0);
        let second = grid.take_visible();
        assert!(!second.is_empty());
        assert!(second.iter().all(|id| !first.contains(id)));
    }

    #[test]
    fn nothing_requested_before_first_resize() {
        let mut grid = GridState::new(ObserverOptions::default(), 0.85);
        grid.load(index(3));
        assert!(grid.take_visible().is_empty());
    }

    #[test]
    fn scroll_target_is_clamped() {
        let mut grid = loaded_grid(20);
        let top = grid.scroll_target(-50.0);
        assert_abs_diff_eq!(top.y, 0.0);
        let bottom = grid.scroll_target(1.0e9);
        assert_abs_diff_eq!(bottom.y, 1.0);
    }

    #[test]
    fn failure_keeps_key() {
        let mut grid = GridState::new(ObserverOptions::default(), 0.85);
        grid.fail("error-server-unreachable");
        assert_eq!(grid.status, LoadStatus::Failed("error-server-unreachable"));
    }
}
