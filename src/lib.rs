// SPDX-License-Identifier: MPL-2.0
//! `gallery_lightbox` is a desktop client for thumbnail gallery servers,
//! built with the Iced GUI framework.
//!
//! It lazily loads thumbnails into a grid as they scroll into view and
//! opens full images in a lightbox with zoom, pan, rotation, keyboard and
//! touch navigation.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod lazy_load;
pub mod lightbox;
pub mod menu;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
