// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`GALLERY_LIGHTBOX_DATA_DIR`, `GALLERY_LIGHTBOX_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the application name appended
//!
//! The data directory holds `state.cbor` (theme preference); the config
//! directory holds the user-editable `settings.toml`.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "GalleryLightbox";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "GALLERY_LIGHTBOX_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GALLERY_LIGHTBOX_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

#[derive(Debug, Clone, Copy)]
enum AppDir {
    Data,
    Config,
}

impl AppDir {
    fn cli_override(self) -> Option<PathBuf> {
        let cell = match self {
            AppDir::Data => &CLI_DATA_DIR,
            AppDir::Config => &CLI_CONFIG_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn env_var(self) -> &'static str {
        match self {
            AppDir::Data => ENV_DATA_DIR,
            AppDir::Config => ENV_CONFIG_DIR,
        }
    }

    fn platform_base(self) -> Option<PathBuf> {
        match self {
            AppDir::Data => dirs::data_dir(),
            AppDir::Config => dirs::config_dir(),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = override_path.or_else(|| self.cli_override()) {
            return Some(path);
        }

        match std::env::var(self.env_var()) {
            Ok(env_path) if !env_path.is_empty() => return Some(PathBuf::from(env_path)),
            _ => {}
        }

        self.platform_base().map(|base| base.join(APP_NAME))
    }
}

/// Records the `--data-dir` / `--config-dir` command line values.
///
/// Later calls are ignored; the first recorded values win for the lifetime
/// of the process.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) {
    record_override(&CLI_DATA_DIR, "data", data_dir);
    record_override(&CLI_CONFIG_DIR, "config", config_dir);
}

/// Sets one override cell; each cell is recorded independently.
fn record_override(cell: &OnceLock<Option<PathBuf>>, kind: &str, value: Option<String>) {
    if cell.set(value.map(PathBuf::from)).is_err() {
        tracing::debug!(kind, "directory override was already initialized");
    }
}

/// Returns the application data directory path.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the application data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Data.resolve(override_path)
}

/// Returns the application config directory path.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    AppDir::Config.resolve(override_path)
}
