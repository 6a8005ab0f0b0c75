// SPDX-License-Identifier: MPL-2.0
//! Light/dark color scheme.
//!
//! The user's choice from the theme toggle is persisted as `scheme` in the
//! application state. Until the toggle is first used, the system preference
//! reported by `dark-light` decides, with dark as the fallback.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Light,
    #[default]
    Dark,
}

impl Scheme {
    /// Scheme to use at startup given the persisted preference.
    #[must_use]
    pub fn resolve(persisted: Option<Scheme>) -> Self {
        persisted.unwrap_or_else(Self::from_system)
    }

    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Scheme::Light
        } else {
            Scheme::Dark
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Scheme::Light => Scheme::Dark,
            Scheme::Dark => Scheme::Light,
        }
    }

    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Scheme::Light => Theme::Light,
            Scheme::Dark => Theme::Dark,
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            Scheme::Light => ColorScheme::light(),
            Scheme::Dark => ColorScheme::dark(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub surface: Color,
    pub surface_raised: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    /// Tint drawn where a thumbnail has not loaded yet.
    pub placeholder: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::WHITE,
            surface_raised: palette::GRAY_100,
            text: palette::GRAY_900,
            text_muted: palette::GRAY_400,
            accent: palette::PRIMARY_500,
            placeholder: Color {
                a: opacity::PLACEHOLDER,
                ..palette::BLACK
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_950,
            surface_raised: palette::GRAY_800,
            text: palette::WHITE,
            text_muted: palette::GRAY_200,
            accent: palette::PRIMARY_400,
            placeholder: Color {
                a: opacity::PLACEHOLDER,
                ..palette::WHITE
            },
        }
    }
}

/// Backdrop behind the lightbox and the open menu; the same in both schemes.
#[must_use]
pub fn backdrop(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..palette::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persisted_scheme_wins_over_system() {
        assert_eq!(Scheme::resolve(Some(Scheme::Light)), Scheme::Light);
        assert_eq!(Scheme::resolve(Some(Scheme::Dark)), Scheme::Dark);
    }

    #[test]
    fn toggle_flips_scheme() {
        assert_eq!(Scheme::Light.toggled(), Scheme::Dark);
        assert_eq!(Scheme::Dark.toggled().toggled(), Scheme::Dark);
    }

    #[test]
    fn scheme_serializes_lowercase() {
        let json = serde_json::to_string(&Scheme::Light).expect("serializes");
        assert_eq!(json, "\"light\"");
    }

    #[test]
    fn surfaces_match_scheme() {
        assert!(ColorScheme::light().surface.r > 0.9);
        assert!(ColorScheme::dark().surface.r < 0.2);
    }
}
