// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the grid, lightbox and menu views.
//!
//! - **Palette**: base colors
//! - **Opacity**: overlay and fade levels
//! - **Spacing**: 8px grid
//! - **Sizing**: control and grid metrics
//! - **Typography**: font sizes
//! - **Radius**: corner radii

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.07, 0.07, 0.07);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.16, 0.16, 0.16);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.9);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    /// Placeholder tile tint before its thumbnail arrives.
    pub const PLACEHOLDER: f32 = 0.08;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    /// Height of the top bar holding the menu, theme and back-to-top controls.
    pub const TOP_BAR_HEIGHT: f32 = 40.0;
    /// Height of a directory header row in the grid.
    pub const DIRECTORY_HEADER_HEIGHT: f32 = 36.0;
    /// Height reserved for a thumbnail caption.
    pub const CAPTION_HEIGHT: f32 = 20.0;
    pub const MENU_WIDTH: f32 = 320.0;
    pub const SPINNER: f32 = 48.0;
    pub const CLOSE_BUTTON: f32 = 36.0;
}

pub mod typography {
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
    pub const ICON: f32 = 20.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_grid() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
    }

    #[test]
    fn overlays_are_translucent() {
        for alpha in [opacity::OVERLAY_MEDIUM, opacity::OVERLAY_STRONG, opacity::PLACEHOLDER] {
            assert!(alpha > 0.0 && alpha < 1.0);
        }
    }
}
