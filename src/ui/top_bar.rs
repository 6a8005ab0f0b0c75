// SPDX-License-Identifier: MPL-2.0
//! Bar above the grid: menu toggle, startup notice, scheme toggle and
//! back-to-top.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::theming::{ColorScheme, Scheme};
use iced::alignment::Vertical;
use iced::widget::{button, tooltip, Container, Row, Text};
use iced::{Background, Element, Length, Theme};

#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    ToggleScheme,
    BackToTop,
    DismissNotice,
}

pub struct ViewModel {
    pub menu_available: bool,
    pub menu_open: bool,
    pub scheme: Scheme,
    pub colors: ColorScheme,
    /// Translated startup warning, shown until clicked.
    pub notice: Option<String>,
}

pub fn view<'a>(model: ViewModel, i18n: &'a I18n) -> Element<'a, Message> {
    let colors = model.colors;
    let control = move |glyph: &'static str, label: String, message: Message| -> Element<'a, Message> {
        let body = button(Text::new(glyph).size(typography::ICON))
            .padding([spacing::XXS, spacing::XS])
            .on_press(message)
            .style(move |_theme: &Theme, status| button::Style {
                background: match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        Some(Background::Color(colors.surface_raised))
                    }
                    _ => None,
                },
                text_color: colors.text,
                ..button::Style::default()
            });
        tooltip(
            body,
            Text::new(label).size(typography::CAPTION),
            tooltip::Position::Bottom,
        )
        .into()
    };

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .height(Length::Fill);

    if model.menu_available {
        let key = if model.menu_open {
            "menu-close"
        } else {
            "menu-open"
        };
        row = row.push(control("\u{2630}", i18n.tr(key), Message::ToggleMenu));
    }

    let scheme_key = match model.scheme {
        Scheme::Dark => "scheme-switch-light",
        Scheme::Light => "scheme-switch-dark",
    };
    let middle: Element<'a, Message> = match model.notice {
        Some(notice) => button(Text::new(notice).size(typography::CAPTION))
            .on_press(Message::DismissNotice)
            .style(move |_theme: &Theme, _status| button::Style {
                background: None,
                text_color: colors.accent,
                ..button::Style::default()
            })
            .into(),
        None => Row::new().into(),
    };
    row = row
        .push(Container::new(middle).width(Length::Fill))
        .push(control("\u{25D0}", i18n.tr(scheme_key), Message::ToggleScheme))
        .push(control("\u{2191}", i18n.tr("back-to-top"), Message::BackToTop));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::TOP_BAR_HEIGHT))
        .padding([0.0, spacing::XS])
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(colors.surface_raised)),
            ..Default::default()
        })
        .into()
}
