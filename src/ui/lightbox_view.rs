// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay rendering.
//!
//! The image is laid out at its on-screen bounding size inside a scrollable
//! that is centered with padding when the image is smaller than the window.
//! Panning is rendered by snapping that scrollable to the offset computed by
//! the lightbox state, so the scrollable never moves on its own.

use crate::i18n::fluent::I18n;
use crate::lightbox::{Message, State, SCROLLABLE_ID};
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::theming::backdrop;
use crate::ui::widgets::{input_shield, Spinner};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, mouse_area, Column, Container, Image, Scrollable, Stack, Text};
use iced::{mouse, Background, Border, Color, ContentFit, Element, Length, Padding, Size, Theme};

pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let backdrop_layer = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(backdrop(opacity::OVERLAY_STRONG))),
                ..Default::default()
            }),
    )
    .on_press(Message::BackgroundClicked);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop_layer);

    if let (Some(image), Some(geometry)) = (state.display_image(), state.geometry()) {
        layers = layers.push(view_image(
            image.handle.clone(),
            geometry.bounding,
            geometry.viewport,
            state,
        ));
    } else if state.is_loading() {
        layers = layers.push(
            Container::new(Spinner::new(Color::WHITE, state.spinner_rotation()).view())
                .center(Length::Fill),
        );
    }

    layers.push(close_button(i18n)).into()
}

fn view_image<'a>(
    handle: iced::widget::image::Handle,
    bounding: Size,
    viewport: Size,
    state: &State,
) -> Element<'a, Message> {
    let interaction = if state.is_dragging() {
        mouse::Interaction::Grabbing
    } else if state.can_pan() {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::Pointer
    };

    let picture = mouse_area(
        Image::new(handle)
            .width(Length::Fixed(bounding.width))
            .height(Length::Fixed(bounding.height))
            .content_fit(ContentFit::Fill),
    )
    .on_press(Message::ImagePressed)
    .interaction(interaction);

    let scrollable = Scrollable::new(Container::new(picture).padding(centering_padding(bounding, viewport)))
        .id(iced::widget::Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        });

    input_shield(scrollable).into()
}

/// Padding that centers `content` within `available` on each axis where it
/// is smaller.
fn centering_padding(content: Size, available: Size) -> Padding {
    let horizontal = ((available.width - content.width) / 2.0).max(0.0);
    let vertical = ((available.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

fn close_button<'a>(i18n: &I18n) -> Element<'a, Message> {
    let close = button(
        Text::new("\u{2715}")
            .size(typography::ICON)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(sizing::CLOSE_BUTTON))
    .height(Length::Fixed(sizing::CLOSE_BUTTON))
    .on_press(Message::Close)
    .style(|_theme: &Theme, status| {
        let alpha = match status {
            button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_STRONG,
            _ => opacity::OVERLAY_MEDIUM,
        };
        button::Style {
            background: Some(Background::Color(backdrop(alpha))),
            text_color: Color::WHITE,
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    });

    let labelled = iced::widget::tooltip(
        close,
        Text::new(i18n.tr("lightbox-close")).size(typography::CAPTION),
        iced::widget::tooltip::Position::Left,
    );

    Container::new(labelled)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .padding(spacing::MD)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gallery::{GalleryIndex, ImageId};
    use crate::test_utils::{assert_abs_diff_eq, blank_image};
    use iced::{touch, Event, Point};
    use iced_test::simulator;

    /// Matches the simulator's default window.
    const WINDOW: Size = Size::new(1024.0, 768.0);
    const ON_IMAGE: Point = Point::new(512.0, 384.0);
    const BESIDE_IMAGE: Point = Point::new(900.0, 384.0);

    /// Lightbox showing a 400x300 image at scale 1, centered in the window.
    fn opened() -> State {
        let index = GalleryIndex::default();
        let mut state = State::default();
        let _ = state.handle(Message::ViewportResized(WINDOW), &index);
        let _ = state.handle(Message::Open(ImageId::new(5)), &index);
        let request = state.pending_request().expect("fetch pending");
        let _ = state.handle(
            Message::ImageFetched {
                request,
                result: Ok(blank_image(400, 300)),
            },
            &index,
        );
        state
    }

    fn i18n() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default())
    }

    fn messages_at(state: &State, position: Point, events: Vec<Event>) -> Vec<Message> {
        let i18n = i18n();
        let mut ui = simulator(view(state, &i18n));
        ui.point_at(position);
        let _ = ui.simulate(events);
        ui.into_messages().collect()
    }

    fn tap(position: Point) -> Vec<Event> {
        let id = touch::Finger(1);
        vec![
            Event::Touch(touch::Event::FingerPressed { id, position }),
            Event::Touch(touch::Event::FingerLifted { id, position }),
        ]
    }

    fn click() -> Vec<Event> {
        iced_test::simulator::click().collect()
    }

    fn closes(messages: &[Message]) -> bool {
        messages
            .iter()
            .any(|message| matches!(message, Message::BackgroundClicked | Message::Close))
    }

    #[test]
    fn touch_never_closes_the_lightbox() {
        let state = opened();
        assert!(!state.can_pan());

        for position in [ON_IMAGE, BESIDE_IMAGE] {
            let messages = messages_at(&state, position, tap(position));
            assert!(!closes(&messages), "tap at {position:?} closed the lightbox");
        }
    }

    #[test]
    fn click_on_backdrop_closes() {
        let messages = messages_at(&opened(), BESIDE_IMAGE, click());
        assert!(messages
            .iter()
            .any(|message| matches!(message, Message::BackgroundClicked)));
    }

    #[test]
    fn click_on_image_starts_drag_without_closing() {
        let messages = messages_at(&opened(), ON_IMAGE, click());
        assert!(messages
            .iter()
            .any(|message| matches!(message, Message::ImagePressed)));
        assert!(!closes(&messages));
    }

    #[test]
    fn close_button_closes() {
        let state = opened();
        let i18n = i18n();
        let mut ui = simulator(view(&state, &i18n));
        let _ = ui.click("\u{2715}").expect("close button shown");

        let messages: Vec<Message> = ui.into_messages().collect();
        assert!(messages
            .iter()
            .any(|message| matches!(message, Message::Close)));
        assert!(!messages
            .iter()
            .any(|message| matches!(message, Message::BackgroundClicked)));
    }

    #[test]
    fn small_image_is_centered() {
        let padding = centering_padding(Size::new(200.0, 100.0), Size::new(800.0, 600.0));
        assert_abs_diff_eq!(padding.left, 300.0);
        assert_abs_diff_eq!(padding.right, 300.0);
        assert_abs_diff_eq!(padding.top, 250.0);
        assert_abs_diff_eq!(padding.bottom, 250.0);
    }

    #[test]
    fn oversized_axis_gets_no_padding() {
        let padding = centering_padding(Size::new(1600.0, 100.0), Size::new(800.0, 600.0));
        assert_abs_diff_eq!(padding.left, 0.0);
        assert_abs_diff_eq!(padding.top, 250.0);
    }
}
