// SPDX-License-Identifier: MPL-2.0
//! Gallery component encapsulating state and update logic.

use super::fade::Fade;
use super::scroll_lock::{PageScroll, ScrollLockGuard};
use super::snapshot::{GridTile, ViewerSnapshot};
use super::view::{self, ViewContext};
use super::viewer::ViewerState;
use crate::catalog::{Project, ProjectId};
use iced::{event, keyboard, time, Element, Event, Subscription};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Interval between fade frames while the viewer image fades in.
const FADE_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Keys the gallery reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl GalleryKey {
    /// Maps an iced key to a gallery key, if the gallery handles it.
    #[must_use]
    pub fn from_key(key: &keyboard::Key) -> Option<Self> {
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => Some(GalleryKey::Escape),
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(GalleryKey::ArrowLeft),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                Some(GalleryKey::ArrowRight)
            }
            _ => None,
        }
    }
}

/// What caused the lightbox to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

/// Messages emitted by gallery widgets and the global keyboard listener.
#[derive(Debug, Clone)]
pub enum Message {
    OpenProject(ProjectId),
    CloseRequested(CloseTrigger),
    NextImage,
    PreviousImage,
    JumpToImage(usize),
    /// A press landed on the lightbox content. It is absorbed there so it
    /// never reaches the backdrop.
    ContentPressed,
    KeyPressed(GalleryKey),
    Tick(Instant),
}

/// Side effects the application should know about after a gallery message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Opened(ProjectId),
    Closed(CloseTrigger),
}

/// Project grid plus lightbox viewer.
#[derive(Debug)]
pub struct State {
    projects: Vec<Arc<Project>>,
    viewer: ViewerState,
    page_scroll: PageScroll,
    /// Held exactly while the viewer is open.
    scroll_lock: Option<ScrollLockGuard>,
    fade: Fade,
    now: Instant,
}

impl State {
    #[must_use]
    pub fn new(projects: Vec<Arc<Project>>, page_scroll: PageScroll, fade: Duration) -> Self {
        Self {
            projects,
            viewer: ViewerState::Closed,
            page_scroll,
            scroll_lock: None,
            fade: Fade::new(fade),
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn projects(&self) -> &[Arc<Project>] {
        &self.projects
    }

    #[must_use]
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.viewer.is_open()
    }

    #[must_use]
    pub fn page_scroll(&self) -> &PageScroll {
        &self.page_scroll
    }

    /// Handle a gallery message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::OpenProject(id) => self.open(id),
            Message::CloseRequested(trigger) => self.close(trigger),
            Message::NextImage => {
                if self.viewer.next_image() {
                    self.restart_fade();
                }
                Effect::None
            }
            Message::PreviousImage => {
                if self.viewer.previous_image() {
                    self.restart_fade();
                }
                Effect::None
            }
            Message::JumpToImage(index) => {
                if self.viewer.jump_to(index) {
                    self.restart_fade();
                }
                Effect::None
            }
            Message::ContentPressed => Effect::None,
            Message::KeyPressed(key) => match key {
                GalleryKey::Escape => self.close(CloseTrigger::Escape),
                GalleryKey::ArrowRight => self.handle(Message::NextImage),
                GalleryKey::ArrowLeft => self.handle(Message::PreviousImage),
            },
            Message::Tick(now) => {
                self.now = now;
                self.fade.settle(now);
                Effect::None
            }
        }
    }

    fn open(&mut self, id: ProjectId) -> Effect {
        let Some(project) = self.projects.iter().find(|p| p.id() == id).cloned() else {
            log::warn!("ignoring request to open unknown project {id}");
            return Effect::None;
        };

        self.viewer = ViewerState::open(project);
        if self.scroll_lock.is_none() {
            self.scroll_lock = Some(self.page_scroll.lock());
        }
        self.restart_fade();
        Effect::Opened(id)
    }

    fn close(&mut self, trigger: CloseTrigger) -> Effect {
        if !self.viewer.is_open() {
            return Effect::None;
        }
        self.viewer = ViewerState::Closed;
        self.scroll_lock = None;
        Effect::Closed(trigger)
    }

    fn restart_fade(&mut self) {
        self.now = Instant::now();
        self.fade.restart(self.now);
    }

    /// Grid tiles in catalog order.
    #[must_use]
    pub fn tiles(&self) -> Vec<GridTile<'_>> {
        self.projects
            .iter()
            .map(|project| GridTile {
                id: project.id(),
                title: project.title(),
                thumbnail: project.thumbnail(),
            })
            .collect()
    }

    /// What the lightbox shows, or `None` while it is closed.
    #[must_use]
    pub fn snapshot(&self) -> Option<ViewerSnapshot<'_>> {
        match &self.viewer {
            ViewerState::Open { project, index } => {
                ViewerSnapshot::new(project, *index, self.fade.opacity(self.now))
            }
            ViewerState::Closed => None,
        }
    }

    /// Keyboard listener for the lifetime of the gallery, plus fade frames
    /// while an image is fading in.
    pub fn subscription(&self) -> Subscription<Message> {
        let keys = event::listen_with(|event, status, _window| {
            if matches!(status, event::Status::Captured) {
                return None;
            }
            match event {
                Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                    GalleryKey::from_key(&key).map(Message::KeyPressed)
                }
                _ => None,
            }
        });

        if self.fade.is_animating(Instant::now()) {
            Subscription::batch([keys, time::every(FADE_FRAME_INTERVAL).map(Message::Tick)])
        } else {
            keys
        }
    }

    pub fn view_grid<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        view::grid(&self.tiles(), ctx)
    }

    /// The lightbox overlay, or `None` while it is closed.
    pub fn view_overlay<'a>(&'a self, ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
        self.snapshot().map(|snapshot| view::overlay(snapshot, ctx))
    }
}
