// SPDX-License-Identifier: MPL-2.0
//! Per-image rotation in quarter turns.
//!
//! Rotations are remembered per [`ImageId`] for the whole session, so coming
//! back to an image shows it the way it was last left.

use crate::gallery::ImageId;
use std::collections::HashMap;

/// Rotation angle restricted to 0°, 90°, 180° or 270°.
///
/// # Example
///
/// ```
/// use gallery_lightbox::lightbox::{RotationAngle, Turn};
///
/// let angle = RotationAngle::default().turned(Turn::Right);
/// assert_eq!(angle.degrees(), 90);
/// assert_eq!(angle.turned(Turn::Left).degrees(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RotationAngle(u16);

/// Direction of a single 90° rotation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise, bound to `l`.
    Left,
    /// Clockwise, bound to `r`.
    Right,
}

impl RotationAngle {
    pub const ZERO: Self = Self(0);

    /// Normalizes any angle (including negative ones) to a quarter turn,
    /// rounding down to the previous multiple of 90°.
    #[must_use]
    pub fn from_degrees(degrees: i32) -> Self {
        let wrapped = degrees.rem_euclid(360);
        // wrapped is in 0..360, so the cast cannot truncate
        Self(((wrapped / 90) * 90) as u16)
    }

    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn radians(self) -> f32 {
        f32::from(self.0).to_radians()
    }

    #[must_use]
    pub fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::Right => Self((self.0 + 90) % 360),
            Turn::Left => Self((self.0 + 270) % 360),
        }
    }

    /// True for 90° and 270°, where the displayed width and height trade places.
    #[must_use]
    pub fn swaps_axes(self) -> bool {
        self.0 == 90 || self.0 == 270
    }

    /// Rotates a vector clockwise (screen coordinates, y pointing down) by
    /// this angle.
    #[must_use]
    pub fn apply(self, (x, y): (f32, f32)) -> (f32, f32) {
        match self.0 {
            90 => (-y, x),
            180 => (-x, -y),
            270 => (y, -x),
            _ => (x, y),
        }
    }

    /// Rotates a vector by the opposite of this angle.
    #[must_use]
    pub fn unapply(self, (x, y): (f32, f32)) -> (f32, f32) {
        match self.0 {
            90 => (y, -x),
            180 => (-x, -y),
            270 => (-y, x),
            _ => (x, y),
        }
    }
}

/// Session-long map of image rotations. Images never rotated read as 0°.
#[derive(Debug, Clone, Default)]
pub struct RotationMap {
    angles: HashMap<ImageId, RotationAngle>,
}

impl RotationMap {
    #[must_use]
    pub fn get(&self, id: ImageId) -> RotationAngle {
        self.angles.get(&id).copied().unwrap_or_default()
    }

    /// Applies one quarter turn to `id` and returns the new angle.
    pub fn turn(&mut self, id: ImageId, turn: Turn) -> RotationAngle {
        let angle = self.get(id).turned(turn);
        if angle == RotationAngle::ZERO {
            self.angles.remove(&id);
        } else {
            self.angles.insert(id, angle);
        }
        angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn from_degrees_rounds_down_and_wraps() {
        assert_eq!(RotationAngle::from_degrees(0).degrees(), 0);
        assert_eq!(RotationAngle::from_degrees(135).degrees(), 90);
        assert_eq!(RotationAngle::from_degrees(450).degrees(), 90);
        assert_eq!(RotationAngle::from_degrees(-90).degrees(), 270);
        assert_eq!(RotationAngle::from_degrees(-360).degrees(), 0);
    }

    #[test]
    fn four_turns_in_either_direction_return_to_start() {
        for start in [0, 90, 180, 270] {
            let angle = RotationAngle::from_degrees(start);
            for turn in [Turn::Left, Turn::Right] {
                let back = angle.turned(turn).turned(turn).turned(turn).turned(turn);
                assert_eq!(back, angle);
            }
        }
    }

    #[test]
    fn left_from_zero_wraps_to_270() {
        assert_eq!(RotationAngle::ZERO.turned(Turn::Left).degrees(), 270);
    }

    #[test]
    fn swaps_axes_only_on_quarter_turns() {
        assert!(!RotationAngle::from_degrees(0).swaps_axes());
        assert!(RotationAngle::from_degrees(90).swaps_axes());
        assert!(!RotationAngle::from_degrees(180).swaps_axes());
        assert!(RotationAngle::from_degrees(270).swaps_axes());
    }

    #[test]
    fn apply_matches_trigonometric_rotation() {
        for degrees in [0, 90, 180, 270] {
            let angle = RotationAngle::from_degrees(degrees);
            let (sin, cos) = angle.radians().sin_cos();
            let (x, y) = (3.0_f32, -7.0_f32);
            let (rx, ry) = angle.apply((x, y));
            assert_abs_diff_eq!(rx, x * cos - y * sin, epsilon = 1e-4);
            assert_abs_diff_eq!(ry, x * sin + y * cos, epsilon = 1e-4);
        }
    }

    #[test]
    fn unapply_inverts_apply() {
        for degrees in [0, 90, 180, 270] {
            let angle = RotationAngle::from_degrees(degrees);
            assert_eq!(angle.unapply(angle.apply((4.0, 9.0))), (4.0, 9.0));
        }
    }

    #[test]
    fn rotation_map_defaults_to_zero_and_remembers_turns() {
        let mut map = RotationMap::default();
        let id = ImageId::new(6);

        assert_eq!(map.get(id), RotationAngle::ZERO);
        map.turn(id, Turn::Right);
        map.turn(id, Turn::Right);
        assert_eq!(map.get(id).degrees(), 180);
        assert_eq!(map.get(ImageId::new(7)), RotationAngle::ZERO);
    }
}
