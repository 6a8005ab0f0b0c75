// SPDX-License-Identifier: MPL-2.0
//! Directory jump menu.
//!
//! One entry per directory marker of the index, in document order. Picking
//! an entry closes the menu and asks the grid to scroll to that marker.

use crate::gallery::GalleryIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    /// Id of the directory marker to scroll to.
    pub target: String,
    pub label: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    Select(String),
    /// Click on the backdrop behind the open list.
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    ScrollTo(String),
}

#[derive(Debug, Clone, Default)]
pub struct State {
    entries: Vec<MenuEntry>,
    available: bool,
    open: bool,
}

impl State {
    /// Builds the menu for `index`. Calling it again with the same index
    /// yields the same entries.
    #[must_use]
    pub fn build(index: &GalleryIndex) -> Self {
        let entries: Vec<MenuEntry> = index
            .directories()
            .map(|marker| MenuEntry {
                target: marker.id.clone(),
                label: marker.label.clone(),
            })
            .collect();
        Self {
            available: index.show_menu && !entries.is_empty(),
            entries,
            open: false,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Whether the toggle control should be shown at all.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Toggle => {
                self.open = self.available && !self.open;
                Effect::None
            }
            Message::Dismiss => {
                self.open = false;
                Effect::None
            }
            Message::Select(target) => {
                self.open = false;
                if self.entries.iter().any(|entry| entry.target == target) {
                    Effect::ScrollTo(target)
                } else {
                    Effect::None
                }
            }
        }
    }
}
