// SPDX-License-Identifier: MPL-2.0
//! Static page sections around the gallery: hero, about, contact, footer.
//!
//! The app cannot hand a URL to a browser, so every link is a button that
//! reports the URL back to the parent, which copies it to the clipboard.

use crate::catalog::{ContactLink, Profile};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the page sections.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub profile: &'a Profile,
    /// Year shown in the footer.
    pub year: i32,
}

/// Messages emitted by the page sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    CopyLink(String),
}

/// Name, tagline, résumé button and the contact link row.
pub fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.profile.name.as_str()).size(typography::DISPLAY));

    if !ctx.profile.tagline.is_empty() {
        column = column.push(Text::new(ctx.profile.tagline.as_str()).size(typography::BODY_LG));
    }

    if let Some(resume) = &ctx.profile.resume {
        column = column.push(
            button(Text::new(ctx.i18n.tr("hero-resume")).size(typography::BODY))
                .on_press(Message::CopyLink(resume.clone()))
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        );
    }

    column = column.push(link_row(&ctx.profile.links));

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .into()
}

/// About paragraphs followed by the skill tags.
pub fn about<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let paragraphs = ctx
        .profile
        .about
        .iter()
        .fold(Column::new().spacing(spacing::SM), |column, paragraph| {
            column.push(Text::new(paragraph.as_str()).size(typography::BODY_LG))
        });

    let skills = ctx
        .profile
        .skills
        .iter()
        .fold(Row::new().spacing(spacing::XS), |row, skill| {
            row.push(
                container(Text::new(skill.as_str()).size(typography::CAPTION))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::tag),
            )
        })
        .wrap();

    let content = Column::new()
        .spacing(spacing::MD)
        .push(paragraphs)
        .push(Text::new(ctx.i18n.tr("section-skills")).size(typography::TITLE_SM))
        .push(skills);

    section(ctx.i18n.tr("section-about"), content.into())
}

pub fn contact<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    section(ctx.i18n.tr("section-contact"), link_row(&ctx.profile.links))
}

pub fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let year = ctx.year.to_string();
    let notice = ctx.i18n.tr_with_args(
        "footer-copyright",
        &[("year", year.as_str()), ("name", ctx.profile.name.as_str())],
    );

    Container::new(text(notice).size(typography::CAPTION))
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .into()
}

/// A titled page section, centered and width-capped.
pub fn section<'a, M: 'a>(title: String, content: Element<'a, M>) -> Element<'a, M> {
    let column = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(content);

    Container::new(column)
        .width(Length::Fill)
        .padding([spacing::XL, spacing::LG])
        .align_x(Horizontal::Center)
        .into()
}

fn link_row<'a>(links: &'a [ContactLink]) -> Element<'a, Message> {
    links
        .iter()
        .fold(
            Row::new().spacing(spacing::SM).align_y(Vertical::Center),
            |row, link| {
                row.push(
                    button(
                        Text::new(format!("{} {}", link.kind.glyph(), link.label))
                            .size(typography::BODY),
                    )
                    .on_press(Message::CopyLink(link.url.clone()))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::secondary),
                )
            },
        )
        .into()
}
