// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The grid with its top bar is always the bottom layer so its scroll
//! position survives while the menu or the lightbox is stacked on top.

use super::grid_state::{GridState, LoadStatus};
use super::Message;
use crate::i18n::fluent::I18n;
use crate::lightbox;
use crate::menu;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::Scheme;
use crate::ui::widgets::input_shield;
use crate::ui::{grid, lightbox_view, menu_view, top_bar};
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{Background, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub grid: &'a GridState,
    pub lightbox: &'a lightbox::State,
    pub menu: &'a menu::State,
    pub scheme: Scheme,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ctx.scheme.colors();

    let bar = top_bar::view(
        top_bar::ViewModel {
            menu_available: ctx.menu.is_available(),
            menu_open: ctx.menu.is_open(),
            scheme: ctx.scheme,
            colors,
            notice: ctx.notice.map(|key| ctx.i18n.tr(key)),
        },
        ctx.i18n,
    )
    .map(Message::TopBar);

    let body: Element<'_, Message> = match ctx.grid.status {
        LoadStatus::Ready => input_shield(
            grid::view(grid::ViewContext {
                index: &ctx.grid.index,
                store: &ctx.grid.thumbnails,
                layout: &ctx.grid.layout,
                colors,
                i18n: ctx.i18n,
            })
            .map(Message::Grid),
        )
        .active(ctx.lightbox.is_visible())
        .into(),
        LoadStatus::Loading => centered_text(ctx.i18n.tr("gallery-loading"), colors.text_muted),
        LoadStatus::Failed(key) => Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(iced::Alignment::Center)
                .push(Text::new(ctx.i18n.tr(key)).size(typography::BODY).color(colors.text))
                .push(
                    button(Text::new(ctx.i18n.tr("gallery-retry")).size(typography::BODY))
                        .on_press(Message::ReloadIndex),
                ),
        )
        .center(Length::Fill)
        .into(),
    };

    let surface = colors.surface;
    let base = Container::new(Column::new().push(bar).push(body))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(surface)),
            ..Default::default()
        });

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if ctx.menu.is_open() {
        layers = layers.push(
            Column::new()
                .push(Container::new(Column::new()).height(Length::Fixed(
                    crate::ui::design_tokens::sizing::TOP_BAR_HEIGHT,
                )))
                .push(menu_view::view(ctx.menu, colors).map(Message::Menu)),
        );
    }

    if ctx.lightbox.is_visible() {
        layers = layers.push(lightbox_view::view(ctx.lightbox, ctx.i18n).map(Message::Lightbox));
    }

    layers.into()
}

fn centered_text<'a>(content: String, color: iced::Color) -> Element<'a, Message> {
    Container::new(Text::new(content).size(typography::BODY).color(color))
        .center(Length::Fill)
        .into()
}
