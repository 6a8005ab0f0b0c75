// SPDX-License-Identifier: MPL-2.0
//! Directory menu panel drawn over the grid while open.

use crate::menu::{Message, State};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::theming::{backdrop, ColorScheme};
use iced::widget::{button, mouse_area, Column, Container, Row, Scrollable, Text};
use iced::{Background, Element, Length, Theme};

pub fn view<'a>(state: &'a State, colors: ColorScheme) -> Element<'a, Message> {
    let entries = state.entries().iter().map(|entry| -> Element<'a, Message> {
        button(Text::new(entry.label.as_str()).size(typography::BODY))
            .width(Length::Fill)
            .padding([spacing::XS, spacing::SM])
            .on_press(Message::Select(entry.target.clone()))
            .style(move |_theme: &Theme, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Some(Background::Color(colors.surface))
                    }
                    _ => None,
                };
                button::Style {
                    background,
                    text_color: colors.text,
                    ..button::Style::default()
                }
            })
            .into()
    });

    let panel = Container::new(Scrollable::new(
        Column::with_children(entries).spacing(spacing::XXS),
    ))
    .width(Length::Fixed(sizing::MENU_WIDTH))
    .height(Length::Fill)
    .padding(spacing::XS)
    .style(move |_theme: &Theme| iced::widget::container::Style {
        background: Some(Background::Color(colors.surface_raised)),
        ..Default::default()
    });

    let dismiss_area = mouse_area(
        Container::new(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(backdrop(opacity::OVERLAY_MEDIUM))),
                ..Default::default()
            }),
    )
    .on_press(Message::Dismiss);

    Row::new().push(panel).push(dismiss_area).into()
}
