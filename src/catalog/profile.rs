// SPDX-License-Identifier: MPL-2.0
//! Site owner profile shown in the hero, about, contact and footer sections.

use serde::Deserialize;

/// Kind of contact link, used to pick the glyph shown next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Github,
    Linkedin,
    Email,
    Website,
}

impl LinkKind {
    /// Short glyph rendered before the link label.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            LinkKind::Github => "⌥",
            LinkKind::Linkedin => "in",
            LinkKind::Email => "✉",
            LinkKind::Website => "↗",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    /// Location of the résumé document, if one is published.
    #[serde(default)]
    pub resume: Option<String>,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: Vec<ContactLink>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::from("Portfolio"),
            tagline: String::new(),
            resume: None,
            about: Vec::new(),
            skills: Vec::new(),
            links: Vec::new(),
        }
    }
}
