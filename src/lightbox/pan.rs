// SPDX-License-Identifier: MPL-2.0
//! Pan geometry for the lightbox image.
//!
//! The pan offset (`translate`) lives in the image's own frame, before
//! rotation. On screen the image is displaced by that offset rotated by the
//! current angle, so a pointer delta has to be rotated back before it is
//! accumulated. Containment is computed on the rotated bounding box: at 90°
//! and 270° its width and height are the image's height and width.

use super::rotation::RotationAngle;
use iced::{Size, Vector};

/// Size of an image of `natural` pixels drawn at scale 1.0 inside `viewport`:
/// shrunk to fit, never enlarged.
#[must_use]
pub fn fitted_size(natural: Size, viewport: Size) -> Size {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return Size::ZERO;
    }
    let ratio = (viewport.width / natural.width)
        .min(viewport.height / natural.height)
        .min(1.0);
    if !ratio.is_finite() || ratio <= 0.0 {
        return Size::ZERO;
    }
    Size::new(natural.width * ratio, natural.height * ratio)
}

/// Image-frame size at scale 1.0 once the image is turned by `angle` and
/// fitted to `viewport`.
#[must_use]
pub fn fitted_rotated(natural: Size, viewport: Size, angle: RotationAngle) -> Size {
    if angle.swaps_axes() {
        let on_screen = fitted_size(Size::new(natural.height, natural.width), viewport);
        Size::new(on_screen.height, on_screen.width)
    } else {
        fitted_size(natural, viewport)
    }
}

/// On-screen bounding box of an image whose unrotated fitted size is `fitted`.
#[must_use]
pub fn bounding_size(fitted: Size, scale: f32, angle: RotationAngle) -> Size {
    let scaled = Size::new(fitted.width * scale, fitted.height * scale);
    if angle.swaps_axes() {
        Size::new(scaled.height, scaled.width)
    } else {
        scaled
    }
}

/// True when the whole bounding box is visible, so no pan is possible.
#[must_use]
pub fn fits(bounding: Size, viewport: Size) -> bool {
    bounding.width <= viewport.width && bounding.height <= viewport.height
}

/// Largest on-screen displacement along each axis that keeps the viewport
/// covered by the image.
#[must_use]
pub fn max_screen_offset(bounding: Size, viewport: Size) -> Vector {
    Vector::new(
        ((bounding.width - viewport.width) / 2.0).max(0.0),
        ((bounding.height - viewport.height) / 2.0).max(0.0),
    )
}

/// Screen displacement produced by an image-frame `translate`.
#[must_use]
pub fn screen_displacement(translate: Vector, angle: RotationAngle) -> Vector {
    let (x, y) = angle.apply((translate.x, translate.y));
    Vector::new(x, y)
}

/// Converts a screen-space pointer delta into the image frame.
#[must_use]
pub fn to_image_frame(delta: Vector, angle: RotationAngle) -> Vector {
    let (x, y) = angle.unapply((delta.x, delta.y));
    Vector::new(x, y)
}

/// Clamps `translate` so the rotated image keeps covering the viewport.
///
/// Returns `(0, 0)` when the image fits entirely.
#[must_use]
pub fn clamp_translate(
    translate: Vector,
    angle: RotationAngle,
    bounding: Size,
    viewport: Size,
) -> Vector {
    if fits(bounding, viewport) {
        return Vector::ZERO;
    }
    let limit = max_screen_offset(bounding, viewport);
    let screen = screen_displacement(translate, angle);
    let clamped = Vector::new(
        screen.x.clamp(-limit.x, limit.x),
        screen.y.clamp(-limit.y, limit.y),
    );
    to_image_frame(clamped, angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn angle(degrees: i32) -> RotationAngle {
        RotationAngle::from_degrees(degrees)
    }

    #[test]
    fn fitted_size_shrinks_but_never_enlarges() {
        let viewport = Size::new(800.0, 600.0);
        let big = fitted_size(Size::new(1600.0, 600.0), viewport);
        assert_abs_diff_eq!(big.width, 800.0);
        assert_abs_diff_eq!(big.height, 300.0);

        let small = fitted_size(Size::new(200.0, 100.0), viewport);
        assert_eq!(small, Size::new(200.0, 100.0));

        assert_eq!(fitted_size(Size::new(0.0, 10.0), viewport), Size::ZERO);
    }

    #[test]
    fn rotated_fit_uses_turned_dimensions() {
        let viewport = Size::new(800.0, 600.0);
        let fitted = fitted_rotated(Size::new(1200.0, 400.0), viewport, angle(90));
        // Turned, the image is 400 wide and 1200 tall: shrunk by 0.5.
        assert_abs_diff_eq!(fitted.width, 600.0);
        assert_abs_diff_eq!(fitted.height, 200.0);
        let bounding = bounding_size(fitted, 1.0, angle(90));
        assert!(fits(bounding, viewport));
    }

    #[test]
    fn bounding_swaps_axes_on_quarter_turns() {
        let fitted = Size::new(400.0, 100.0);
        assert_eq!(bounding_size(fitted, 2.0, angle(0)), Size::new(800.0, 200.0));
        assert_eq!(bounding_size(fitted, 2.0, angle(90)), Size::new(200.0, 800.0));
        assert_eq!(bounding_size(fitted, 2.0, angle(270)), Size::new(200.0, 800.0));
        assert_eq!(bounding_size(fitted, 2.0, angle(180)), Size::new(800.0, 200.0));
    }

    #[test]
    fn clamp_recenters_when_image_fits() {
        let translate = clamp_translate(
            Vector::new(120.0, -40.0),
            angle(0),
            Size::new(300.0, 200.0),
            Size::new(800.0, 600.0),
        );
        assert_eq!(translate, Vector::ZERO);
    }

    #[test]
    fn clamp_never_exceeds_max_offset_at_any_rotation() {
        let viewport = Size::new(800.0, 600.0);
        let bounding = Size::new(1000.0, 1400.0);
        let limit = max_screen_offset(bounding, viewport);

        for degrees in [0, 90, 180, 270] {
            for raw in [
                Vector::new(5000.0, 5000.0),
                Vector::new(-5000.0, 20.0),
                Vector::new(30.0, -5000.0),
            ] {
                let clamped = clamp_translate(raw, angle(degrees), bounding, viewport);
                let screen = screen_displacement(clamped, angle(degrees));
                assert!(screen.x.abs() <= limit.x + 1e-3);
                assert!(screen.y.abs() <= limit.y + 1e-3);
            }
        }
    }

    #[test]
    fn quarter_turn_limits_swap_in_image_frame() {
        // Wide on screen after a 90° turn: only horizontal screen travel.
        let viewport = Size::new(800.0, 600.0);
        let bounding = Size::new(1200.0, 600.0);
        let clamped = clamp_translate(Vector::new(500.0, 500.0), angle(90), bounding, viewport);

        // Screen x maps to image -y at 90°, screen y to image x.
        assert_abs_diff_eq!(clamped.x, 0.0);
        assert_abs_diff_eq!(clamped.y.abs(), 200.0);
    }

    #[test]
    fn pointer_delta_moves_image_with_pointer_under_rotation() {
        let delta = Vector::new(10.0, -4.0);
        for degrees in [0, 90, 180, 270] {
            let local = to_image_frame(delta, angle(degrees));
            let back = screen_displacement(local, angle(degrees));
            assert_abs_diff_eq!(back.x, delta.x);
            assert_abs_diff_eq!(back.y, delta.y);
        }
    }
}
