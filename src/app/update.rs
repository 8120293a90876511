// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.

use super::Message;
use crate::gallery::{self, Effect};
use crate::i18n::fluent::I18n;
use crate::ui::navbar;
use crate::ui::page;
use crate::ui::theming::ThemeMode;
use iced::Task;

/// Mutable state the handlers operate on.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a mut gallery::State,
    pub theme_mode: &'a mut ThemeMode,
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    match ctx.gallery.handle(message) {
        Effect::Opened(id) => log::info!("opened project {id}"),
        Effect::Closed(trigger) => log::info!("closed viewer ({trigger:?})"),
        Effect::None => {}
    }
    Task::none()
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.theme_mode) {
        navbar::Event::ThemeChanged(mode) => log::debug!("theme mode switched to {mode:?}"),
        navbar::Event::None => {}
    }
    Task::none()
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match message {
        page::Message::CopyLink(url) => {
            log::info!("{}", ctx.i18n.tr_with_args("link-copied", &[("url", url.as_str())]));
            iced::clipboard::write(url)
        }
    }
}
