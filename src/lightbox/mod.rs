// SPDX-License-Identifier: MPL-2.0
//! Full-image overlay: loading, navigation, zoom, pan and rotation.
//!
//! [`component::State`] owns the viewer state and is driven by
//! [`component::Message`]s; the remaining modules hold the pure geometry
//! and input interpretation it relies on.

pub mod component;
pub mod gesture;
pub mod keys;
pub mod pan;
pub mod request;
pub mod rotation;
pub mod scale;

pub use component::{Effect, Message, Phase, State, ViewerState, SCROLLABLE_ID};
pub use request::{Attempt, ImageRequest};
pub use rotation::{RotationAngle, RotationMap, Turn};
pub use scale::{Scale, ZoomLimits};
