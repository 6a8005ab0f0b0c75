// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! State lives in the domain modules ([`crate::lightbox`], [`crate::menu`],
//! [`crate::gallery`]); the views here only read it and emit messages,
//! following the Elm-style "state down, messages up" pattern.
//!
//! - [`grid`] - Thumbnail grid layout and rendering
//! - [`lightbox_view`] - Full-image overlay
//! - [`menu_view`] - Directory jump panel
//! - [`top_bar`] - Menu, scheme and back-to-top controls
//! - [`widgets`] - Custom Iced widgets (spinner, input shield)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark scheme management

pub mod design_tokens;
pub mod grid;
pub mod lightbox_view;
pub mod menu_view;
pub mod theming;
pub mod top_bar;
pub mod widgets;
