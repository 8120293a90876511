// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action (résumé link).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Translucent buttons drawn over the viewer image (prev/next, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Position indicator dot. The dot for the displayed image is filled with
/// the brand color.
pub fn indicator(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match (active, status) {
            (true, _) => palette::PRIMARY_500,
            (false, button::Status::Hovered) => Color {
                a: opacity::OVERLAY_HOVER,
                ..WHITE
            },
            (false, _) => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: WHITE,
            border: Border {
                color: if active { WHITE } else { Color::TRANSPARENT },
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Grid thumbnail tile. The brand border appears on hover.
pub fn tile(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let (border_color, shadow) = match status {
        button::Status::Hovered | button::Status::Pressed => (palette::PRIMARY_500, shadow::MD),
        _ => (palette.background.strong.color, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: palette.background.base.text,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow,
        snap: true,
    }
}

/// Contact links and the navbar theme toggle.
/// Adapts to light/dark theme while maintaining consistency.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_200
            } else {
                Color::from_rgb(0.35, 0.35, 0.35)
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        _ => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
