// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid: layout computation and rendering.
//!
//! The layout is computed up front from the index, the thumbnail store and
//! the window size so that the same tile rectangles drive both the rendered
//! rows and the lazy-load visibility checks.

use crate::gallery::{crop_height, GalleryIndex, ImageId, Section, ThumbnailState, ThumbnailStore};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::theming::{backdrop, ColorScheme};
use iced::alignment::Vertical;
use iced::widget::image::FilterMethod;
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{
    mouse_area, tooltip, Column, Container, Image, Row, Scrollable, Stack, Text,
};
use iced::{gradient, Background, ContentFit, Element, Length, Radians, Rectangle, Size, Theme};
use std::f32::consts::PI;

/// Identifier of the grid scrollable, used for menu jumps and back-to-top.
pub const GRID_SCROLLABLE_ID: &str = "gallery-grid";

const FADE_HEIGHT: f32 = 48.0;

#[derive(Debug, Clone)]
pub enum Message {
    Scrolled {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    ThumbnailClicked(ImageId),
    ThumbnailContext(ImageId),
}

/// Inputs that shape the grid besides the index itself.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Size of the area the grid scrollable occupies.
    pub area: Size,
    /// Full window height, used for the tall-thumbnail crop.
    pub window_height: f32,
    pub max_height_fraction: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileSlot {
    pub id: ImageId,
    /// Tile bounds in content coordinates, caption included.
    pub rect: Rectangle,
    /// Height of the image area.
    pub image_height: f32,
    /// Full drawn height when the image is clipped to `image_height`.
    pub cropped_from: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridRow {
    Header { target: String, label: String, y: f32 },
    Tiles { y: f32, height: f32, tiles: Vec<TileSlot> },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridLayout {
    pub tile_width: f32,
    pub columns: usize,
    pub rows: Vec<GridRow>,
    pub content_height: f32,
}

/// Number of tiles per row for a content `width`.
#[must_use]
pub fn column_count(width: f32, tile_width: f32) -> usize {
    let usable = width - 2.0 * spacing::MD + spacing::XS;
    let per_tile = tile_width + spacing::XS;
    if per_tile <= 0.0 || usable <= 0.0 {
        return 1;
    }
    ((usable / per_tile).floor() as usize).max(1)
}

impl GridLayout {
    #[must_use]
    pub fn compute(index: &GalleryIndex, store: &ThumbnailStore, params: LayoutParams) -> Self {
        let available = (params.area.width - 2.0 * spacing::MD).max(1.0);
        let tile_width = (index.display_width as f32).clamp(1.0, available);
        let columns = column_count(params.area.width, tile_width);

        let mut rows = Vec::new();
        let mut y = spacing::MD;

        for section in &index.sections {
            match section {
                Section::Directories(markers) => {
                    for marker in markers {
                        rows.push(GridRow::Header {
                            target: marker.id.clone(),
                            label: marker.label.clone(),
                            y,
                        });
                        y += sizing::DIRECTORY_HEADER_HEIGHT + spacing::XS;
                    }
                }
                Section::Thumbnails(items) => {
                    for chunk in items.chunks(columns) {
                        let mut tiles: Vec<TileSlot> = chunk
                            .iter()
                            .enumerate()
                            .map(|(column, item)| {
                                let (image_height, cropped_from) =
                                    tile_image_height(store, item.id, tile_width, index.fit, params);
                                TileSlot {
                                    id: item.id,
                                    rect: Rectangle::new(
                                        iced::Point::new(
                                            spacing::MD + column as f32 * (tile_width + spacing::XS),
                                            y,
                                        ),
                                        Size::new(tile_width, image_height + sizing::CAPTION_HEIGHT),
                                    ),
                                    image_height,
                                    cropped_from,
                                }
                            })
                            .collect();
                        let height = tiles
                            .iter()
                            .map(|tile| tile.rect.height)
                            .fold(0.0_f32, f32::max);
                        for tile in &mut tiles {
                            tile.rect.y = y;
                        }
                        rows.push(GridRow::Tiles { y, height, tiles });
                        y += height + spacing::XS;
                    }
                }
            }
        }

        let content_height = if rows.is_empty() {
            2.0 * spacing::MD
        } else {
            y - spacing::XS + spacing::MD
        };

        Self {
            tile_width,
            columns,
            rows,
            content_height,
        }
    }

    /// Tile rectangles for the visibility observer.
    pub fn tile_rects(&self) -> impl Iterator<Item = (ImageId, Rectangle)> + '_ {
        self.rows.iter().flat_map(|row| match row {
            GridRow::Tiles { tiles, .. } => tiles.iter().map(|tile| (tile.id, tile.rect)).collect(),
            GridRow::Header { .. } => Vec::new(),
        })
    }

    /// Scroll offset that brings the directory header `target` to the top.
    #[must_use]
    pub fn header_offset(&self, target: &str) -> Option<f32> {
        self.rows.iter().find_map(|row| match row {
            GridRow::Header { target: t, y, .. } if t == target => {
                Some((y - spacing::MD).max(0.0))
            }
            _ => None,
        })
    }
}

fn tile_image_height(
    store: &ThumbnailStore,
    id: ImageId,
    tile_width: f32,
    fit: bool,
    params: LayoutParams,
) -> (f32, Option<f32>) {
    match store.loaded(id) {
        Some(loaded) => {
            let rendered = loaded.rendered_height(tile_width);
            match crop_height(rendered, fit, params.window_height, params.max_height_fraction) {
                Some(cropped) => (cropped, Some(rendered)),
                None => (rendered, None),
            }
        }
        None => (tile_width, None),
    }
}

pub struct ViewContext<'a> {
    pub index: &'a GalleryIndex,
    pub store: &'a ThumbnailStore,
    pub layout: &'a GridLayout,
    pub colors: ColorScheme,
    pub i18n: &'a I18n,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.index.is_empty() {
        return Container::new(
            Text::new(ctx.i18n.tr("gallery-empty"))
                .size(typography::BODY)
                .color(ctx.colors.text_muted),
        )
        .center(Length::Fill)
        .into();
    }

    let rows = ctx.layout.rows.iter().map(|row| -> Element<'a, Message> {
        match row {
            GridRow::Header { label, .. } => Container::new(
                Text::new(label.clone())
                    .size(typography::BODY)
                    .color(ctx.colors.text),
            )
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DIRECTORY_HEADER_HEIGHT))
            .align_y(Vertical::Center)
            .into(),
            GridRow::Tiles { height, tiles, .. } => tiles
                .iter()
                .fold(Row::new().spacing(spacing::XS), |row, tile| {
                    row.push(view_tile(&ctx, tile))
                })
                .height(Length::Fixed(*height))
                .into(),
        }
    });

    let content = Column::with_children(rows)
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .width(Length::Fill);

    Scrollable::new(content)
        .id(iced::widget::Id::new(GRID_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            bounds: viewport.bounds(),
            offset: viewport.absolute_offset(),
        })
        .into()
}

fn view_tile<'a>(ctx: &ViewContext<'a>, tile: &TileSlot) -> Element<'a, Message> {
    let width = ctx.layout.tile_width;
    let picture: Element<'a, Message> = match ctx.store.get(tile.id) {
        Some(ThumbnailState::Loaded(loaded)) => {
            let drawn = tile.cropped_from.unwrap_or(tile.image_height);
            let filter = if loaded.pixelated {
                FilterMethod::Nearest
            } else {
                FilterMethod::Linear
            };
            let image = Image::new(loaded.image.handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(drawn))
                .content_fit(ContentFit::Fill)
                .filter_method(filter);
            match tile.cropped_from {
                Some(_) => cropped(image.into(), width, tile.image_height, ctx.colors),
                None => image.into(),
            }
        }
        _ => placeholder(width, tile.image_height, ctx.colors),
    };

    let caption = ctx
        .index
        .thumbnail(tile.id)
        .map(|item| item.name.clone())
        .unwrap_or_default();

    let body = Column::new()
        .push(picture)
        .push(
            Container::new(
                Text::new(caption)
                    .size(typography::CAPTION)
                    .color(ctx.colors.text_muted),
            )
            .width(Length::Fixed(width))
            .height(Length::Fixed(sizing::CAPTION_HEIGHT))
            .align_y(Vertical::Center),
        )
        .width(Length::Fixed(width));

    let clickable: Element<'a, Message> = mouse_area(body)
        .on_press(Message::ThumbnailClicked(tile.id))
        .on_right_press(Message::ThumbnailContext(tile.id))
        .interaction(iced::mouse::Interaction::Pointer)
        .into();

    match ctx.index.thumbnail(tile.id).map(|item| item.title.as_str()) {
        Some(title) if !title.is_empty() => tooltip(
            clickable,
            Container::new(Text::new(title.to_owned()).size(typography::CAPTION))
                .padding(spacing::XXS)
                .style(|_theme: &Theme| iced::widget::container::Style {
                    background: Some(Background::Color(backdrop(opacity::OVERLAY_STRONG))),
                    text_color: Some(iced::Color::WHITE),
                    ..Default::default()
                }),
            tooltip::Position::FollowCursor,
        )
        .into(),
        _ => clickable,
    }
}

fn placeholder<'a>(width: f32, height: f32, colors: ColorScheme) -> Element<'a, Message> {
    Container::new(Column::new())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(colors.placeholder)),
            ..Default::default()
        })
        .into()
}

/// Clips a tall image to `height` and fades its lower edge into the surface.
fn cropped<'a>(
    image: Element<'a, Message>,
    width: f32,
    height: f32,
    colors: ColorScheme,
) -> Element<'a, Message> {
    let clipped = Container::new(image)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_y(Vertical::Top)
        .clip(true);

    let surface = colors.surface;
    let fade = Container::new(Column::new())
        .width(Length::Fill)
        .height(Length::Fixed(FADE_HEIGHT.min(height)))
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Gradient(
                gradient::Linear::new(Radians(PI))
                    .add_stop(0.0, iced::Color { a: 0.0, ..surface })
                    .add_stop(1.0, surface)
                    .into(),
            )),
            ..Default::default()
        });

    Stack::new()
        .push(clipped)
        .push(
            Container::new(fade)
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .align_y(Vertical::Bottom),
        )
        .into()
}
