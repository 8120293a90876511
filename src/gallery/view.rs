// SPDX-License-Identifier: MPL-2.0
//! Rendering of the project grid and the lightbox overlay.

use super::component::{CloseTrigger, Message};
use super::snapshot::{GridTile, Indicator, ViewerSnapshot};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette::WHITE, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::{
    button, center, container, mouse_area, opaque, text, Column, Container, Row, Space, Stack,
};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub columns: u16,
    pub thumbnail_height: f32,
}

/// Thumbnail grid, `ctx.columns` tiles per row, in catalog order.
pub fn grid<'a>(tiles: &[GridTile<'a>], ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if tiles.is_empty() {
        return text(ctx.i18n.tr("gallery-empty"))
            .size(typography::BODY_LG)
            .into();
    }

    let columns = usize::from(ctx.columns.max(1));
    let mut grid = Column::new().spacing(spacing::MD);

    for chunk in tiles.chunks(columns) {
        let mut row = Row::new().spacing(spacing::MD);
        for tile in chunk {
            row = row.push(grid_tile(tile, ctx.thumbnail_height));
        }
        // Pad the last row so every tile keeps the same width.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::Fill));
        }
        grid = grid.push(row);
    }

    grid.into()
}

fn grid_tile<'a>(tile: &GridTile<'a>, thumbnail_height: f32) -> Element<'a, Message> {
    let thumbnail = Image::new(Handle::from_path(tile.thumbnail))
        .width(Length::Fill)
        .height(Length::Fixed(thumbnail_height))
        .content_fit(ContentFit::Cover);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(thumbnail)
        .push(text(tile.title).size(typography::TITLE_SM));

    button(content)
        .on_press(Message::OpenProject(tile.id))
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::button::tile)
        .into()
}

/// Full-window lightbox for the open project.
///
/// Presses on the backdrop close the lightbox. Presses anywhere on the
/// content panel are absorbed as [`Message::ContentPressed`] so they never
/// reach the backdrop.
pub fn overlay<'a>(snapshot: ViewerSnapshot<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let close_button = button(text("✕").size(typography::TITLE_SM))
        .on_press(Message::CloseRequested(CloseTrigger::CloseButton))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

    let close_row = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close_button);

    let body = Row::new()
        .spacing(spacing::LG)
        .push(viewer(&snapshot, ctx))
        .push(detail_panel(&snapshot));

    let panel = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(close_row)
            .push(body),
    )
    .padding(spacing::LG)
    .max_width(sizing::LIGHTBOX_MAX_WIDTH)
    .style(styles::container::panel);

    let content = mouse_area(panel).on_press(Message::ContentPressed);

    let backdrop = center(content)
        .padding(spacing::XL)
        .style(styles::overlay::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::CloseRequested(CloseTrigger::Backdrop)))
}

/// Current image with prev/next arrows, position counter and indicators.
fn viewer<'a>(snapshot: &ViewerSnapshot<'a>, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let image = Image::new(Handle::from_path(snapshot.image))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::VIEWER_IMAGE_HEIGHT))
        .content_fit(ContentFit::Contain)
        .opacity(snapshot.image_opacity);

    let (current, total) = snapshot.position();
    let counter = container(
        text(ctx.i18n.tr_with_args(
            "gallery-image-position",
            &[
                ("current", current.to_string().as_str()),
                ("total", total.to_string().as_str()),
            ],
        ))
        .size(typography::CAPTION),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::overlay::indicator(radius::SM));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::VIEWER_IMAGE_HEIGHT))
        .push(image);

    if snapshot.show_navigation {
        layers = layers.push(navigation_arrows());
    }

    layers = layers.push(
        Container::new(counter)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS)
            .align_x(Horizontal::Left)
            .align_y(Vertical::Top),
    );

    let mut column = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(layers);

    if !snapshot.indicators.is_empty() {
        column = column.push(indicator_row(&snapshot.indicators));
    }

    column.into()
}

fn navigation_arrows<'a>() -> Element<'a, Message> {
    let arrow = |glyph: &'a str, message: Message| {
        button(
            container(text(glyph).size(typography::TITLE_MD))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .on_press(message)
        .width(Length::Fixed(sizing::NAV_ARROW))
        .height(Length::Fixed(sizing::NAV_ARROW))
        .padding(0)
        .style(styles::button::overlay(
            WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ))
    };

    let row = Row::new()
        .padding(spacing::XS)
        .align_y(Vertical::Center)
        .push(arrow("‹", Message::PreviousImage))
        .push(Space::new().width(Length::Fill))
        .push(arrow("›", Message::NextImage));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .into()
}

fn indicator_row<'a>(indicators: &[Indicator]) -> Element<'a, Message> {
    indicators
        .iter()
        .fold(
            Row::new().spacing(spacing::XS).align_y(Vertical::Center),
            |row, indicator| {
                let size = if indicator.active {
                    sizing::INDICATOR_DOT_ACTIVE
                } else {
                    sizing::INDICATOR_DOT
                };
                row.push(
                    button(Space::new())
                        .on_press(Message::JumpToImage(indicator.index))
                        .width(Length::Fixed(size))
                        .height(Length::Fixed(size))
                        .padding(0)
                        .style(styles::button::indicator(indicator.active)),
                )
            },
        )
        .into()
}

/// Subtitle, title and description of the open project.
fn detail_panel<'a>(snapshot: &ViewerSnapshot<'a>) -> Element<'a, Message> {
    let project = snapshot.project;

    Column::new()
        .width(Length::Fixed(sizing::DETAIL_PANEL_WIDTH))
        .spacing(spacing::SM)
        .push(text(project.subtitle()).size(typography::CAPTION))
        .push(text(project.title()).size(typography::TITLE_MD))
        .push(text(project.description()).size(typography::BODY))
        .into()
}
