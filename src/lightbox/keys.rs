// SPDX-License-Identifier: MPL-2.0
//! Keyboard bindings while the lightbox is showing.

use super::rotation::Turn;
use crate::gallery::Direction;
use iced::keyboard::key::Named;
use iced::keyboard::Key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(Direction),
    Rotate(Turn),
    ZoomIn,
    ZoomOut,
    /// Key with no effect at all.
    Ignore,
    Close,
}

impl Command {
    /// Maps a key, taken after modifiers are applied (so `Shift+=` on most
    /// layouts arrives as `+`).
    #[must_use]
    pub fn from_key(key: &Key) -> Self {
        match key {
            Key::Named(Named::ArrowRight) => Command::Navigate(Direction::Next),
            Key::Named(Named::ArrowLeft) => Command::Navigate(Direction::Previous),
            Key::Named(named) if is_passive(*named) => Command::Ignore,
            Key::Character(c) => match c.as_str() {
                "l" => Command::Rotate(Turn::Left),
                "r" => Command::Rotate(Turn::Right),
                "+" => Command::ZoomIn,
                "-" => Command::ZoomOut,
                _ => Command::Close,
            },
            Key::Unidentified => Command::Ignore,
            Key::Named(_) => Command::Close,
        }
    }
}

/// Function keys and bare modifiers never close the lightbox.
fn is_passive(named: Named) -> bool {
    matches!(
        named,
        Named::Shift
            | Named::Control
            | Named::Alt
            | Named::AltGraph
            | Named::Super
            | Named::Meta
            | Named::Hyper
            | Named::Fn
            | Named::FnLock
            | Named::CapsLock
            | Named::NumLock
            | Named::ScrollLock
            | Named::F1
            | Named::F2
            | Named::F3
            | Named::F4
            | Named::F5
            | Named::F6
            | Named::F7
            | Named::F8
            | Named::F9
            | Named::F10
            | Named::F11
            | Named::F12
            | Named::F13
            | Named::F14
            | Named::F15
            | Named::F16
            | Named::F17
            | Named::F18
            | Named::F19
            | Named::F20
            | Named::F21
            | Named::F22
            | Named::F23
            | Named::F24
    )
}
