// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{DecodedImage, GalleryIndex, ImageId};
use crate::lightbox;
use crate::menu;
use crate::ui::{grid, top_bar};
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    IndexLoaded(Result<GalleryIndex, Error>),
    /// Fetch the index again after a failure.
    ReloadIndex,
    ThumbnailLoaded {
        id: ImageId,
        result: Result<DecodedImage, Error>,
    },
    ContextAnswered {
        id: ImageId,
        result: Result<serde_json::Value, Error>,
    },
    Grid(grid::Message),
    Lightbox(lightbox::Message),
    Menu(menu::Message),
    TopBar(top_bar::Message),
    WindowResized(Size),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Gallery server URL; overrides `[server] url` from the config file.
    pub server_url: Option<String>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `GALLERY_LIGHTBOX_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `GALLERY_LIGHTBOX_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
