// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds state that survives restarts but is not meant to be hand-edited,
//! kept apart from `settings.toml`. Today that is the color scheme chosen with
//! the theme toggle, stored under the `scheme` key.

use super::paths;
use crate::ui::theming::Scheme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Color scheme picked by the user. `None` until the toggle is used, in
    /// which case the system preference decides.
    #[serde(default)]
    pub scheme: Option<Scheme>,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning) where the warning is an
    /// i18n key describing why the defaults were used instead.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "state file is corrupt");
                    (
                        Self::default(),
                        Some("notification-state-parse-error".to_string()),
                    )
                }
            },
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "state file is unreadable");
                (
                    Self::default(),
                    Some("notification-state-read-error".to_string()),
                )
            }
        }
    }

    /// Saves application state to the default location.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state to a custom directory.
    ///
    /// Returns the i18n key of a warning when the state could not be written.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            tracing::warn!("no data directory to save application state in");
            return Some("notification-state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %err, "could not create state directory");
                return Some("notification-state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if let Err(err) = ciborium::into_writer(self, BufWriter::new(file)) {
                    tracing::warn!(path = %path.display(), error = %err, "could not write application state");
                    return Some("notification-state-write-error".to_string());
                }
                None
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not create state file");
                Some("notification-state-create-error".to_string())
            }
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_state_has_no_scheme() {
        assert!(AppState::default().scheme.is_none());
    }

    #[test]
    fn save_and_load_preserves_scheme() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let state = AppState {
            scheme: Some(Scheme::Light),
        };

        assert!(state.save_to(Some(temp_dir.path().to_path_buf())).is_none());
        let (loaded, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.scheme, Some(Scheme::Light));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (loaded, warning) = AppState::load_from(Some(temp_dir.path().join("absent")));

        assert_eq!(loaded, AppState::default());
        assert!(warning.is_none());
    }

    #[test]
    fn corrupt_file_yields_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), b"\xff\xfe not cbor")
            .expect("failed to write corrupt state");

        let (loaded, warning) = AppState::load_from(Some(temp_dir.path().to_path_buf()));

        assert_eq!(loaded, AppState::default());
        assert_eq!(warning.as_deref(), Some("notification-state-parse-error"));
    }

    #[test]
    fn save_into_unusable_directory_reports_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, b"file").expect("failed to write blocker file");

        let state = AppState {
            scheme: Some(Scheme::Dark),
        };
        assert_eq!(
            state.save_to(Some(blocker)).as_deref(),
            Some("notification-state-dir-error")
        );
    }
}
