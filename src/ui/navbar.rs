// SPDX-License-Identifier: MPL-2.0
//! Navigation bar at the top of the page.
//!
//! Shows the portfolio owner's name and the light/dark theme toggle. The
//! toggle is labelled with the mode it switches to.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub name: &'a str,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ThemeChanged(ThemeMode),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, theme_mode: &mut ThemeMode) -> Event {
    match message {
        Message::ToggleTheme => {
            *theme_mode = theme_mode.toggled();
            Event::ThemeChanged(*theme_mode)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let toggle_label = if ctx.theme_mode.is_dark() {
        ctx.i18n.tr("nav-theme-to-light")
    } else {
        ctx.i18n.tr("nav-theme-to-dark")
    };

    let toggle = button(Text::new(toggle_label).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);

    let row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(Text::new(ctx.name).size(typography::TITLE_MD))
        .push(Space::new().width(Length::Fill))
        .push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_switches_explicit_mode() {
        let mut mode = ThemeMode::Dark;
        assert_eq!(
            update(Message::ToggleTheme, &mut mode),
            Event::ThemeChanged(ThemeMode::Light)
        );
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn toggle_twice_returns_to_start() {
        let mut mode = ThemeMode::Light;
        update(Message::ToggleTheme, &mut mode);
        update(Message::ToggleTheme, &mut mode);
        assert_eq!(mode, ThemeMode::Light);
    }

    #[test]
    fn toggle_resolves_system_mode() {
        let mut mode = ThemeMode::System;
        let was_dark = mode.is_dark();
        update(Message::ToggleTheme, &mut mode);
        assert_ne!(mode, ThemeMode::System);
        assert_ne!(mode.is_dark(), was_dark);
    }
}
