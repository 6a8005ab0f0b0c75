// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown while the lightbox waits for an image.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const ARC_SEGMENTS: u16 = 24;
const STROKE_WIDTH: f32 = 3.0;

/// Half-circle arc drawn at `rotation` radians over a faint full ring.
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    rotation: f32,
    color: Color,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self { rotation, color }
    }

    pub fn view<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::SPINNER))
            .height(Length::Fixed(sizing::SPINNER))
            .into()
    }

    fn arc(&self, center: Point, radius: f32) -> Path {
        let start = self.rotation - PI / 2.0;
        let point_at = |angle: f32| {
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        };
        Path::new(|builder| {
            builder.move_to(point_at(start));
            for i in 1..=ARC_SEGMENTS {
                let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                builder.line_to(point_at(start + PI * t));
            }
        })
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color {
                    a: 0.25,
                    ..self.color
                }),
        );
        frame.stroke(
            &self.arc(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
