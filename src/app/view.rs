// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column. While the lightbox is open it is
//! stacked on top of the page, and the page stops reacting to scroll
//! gestures until the lightbox closes.

use super::Message;
use crate::catalog::Profile;
use crate::gallery::{self, ViewContext as GalleryViewContext};
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::page::{self, ViewContext as PageViewContext};
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::scroll_lock;
use iced::{
    widget::{scrollable, Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    pub gallery: &'a gallery::State,
    pub theme_mode: ThemeMode,
    pub columns: u16,
    pub thumbnail_height: f32,
    pub year: i32,
}

/// Renders the page and, when open, the lightbox above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        name: &ctx.profile.name,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let page_ctx = PageViewContext {
        i18n: ctx.i18n,
        profile: ctx.profile,
        year: ctx.year,
    };
    let gallery_ctx = GalleryViewContext {
        i18n: ctx.i18n,
        columns: ctx.columns,
        thumbnail_height: ctx.thumbnail_height,
    };

    let projects = page::section(
        ctx.i18n.tr("section-projects"),
        ctx.gallery.view_grid(&gallery_ctx),
    )
    .map(Message::Gallery);

    let body = Column::new()
        .width(Length::Fill)
        .push(page::hero(&page_ctx).map(Message::Page))
        .push(projects)
        .push(page::about(&page_ctx).map(Message::Page))
        .push(page::contact(&page_ctx).map(Message::Page))
        .push(page::footer(&page_ctx).map(Message::Page));

    let scroll_locked = !ctx.gallery.page_scroll().is_enabled();
    let page = Column::new()
        .push(navbar)
        .push(scroll_lock(
            scrollable(body).width(Length::Fill).height(Length::Fill),
            scroll_locked,
        ));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if let Some(overlay) = ctx.gallery.view_overlay(&gallery_ctx) {
        layers = layers.push(overlay.map(Message::Gallery));
    }

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
