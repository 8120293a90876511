// SPDX-License-Identifier: MPL-2.0
//! End-to-end gallery behavior against the built-in catalog.

use iced_folio::catalog::{Catalog, Project};
use iced_folio::gallery::{
    CloseTrigger, Effect, GalleryKey, Message, PageScroll, State, ViewerSnapshot, ViewerState,
};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

fn builtin_gallery() -> (State, PageScroll) {
    let catalog = Catalog::builtin(Path::new("assets")).expect("builtin catalog");
    let (_, projects) = catalog.into_parts();
    let page = PageScroll::new();
    (State::new(projects, page.clone(), Duration::ZERO), page)
}

fn project_with_most_images(state: &State) -> Arc<Project> {
    state
        .projects()
        .iter()
        .max_by_key(|p| p.image_count())
        .cloned()
        .expect("catalog has projects")
}

#[test]
fn next_image_n_times_returns_to_first_for_every_project() {
    let (mut state, _page) = builtin_gallery();
    let projects: Vec<_> = state.projects().to_vec();

    for project in projects {
        state.handle(Message::OpenProject(project.id()));
        for _ in 0..project.image_count() {
            state.handle(Message::NextImage);
        }
        assert_eq!(state.viewer().index(), Some(0), "project {}", project.id());
    }
}

#[test]
fn previous_from_first_image_wraps_to_last() {
    let (mut state, _page) = builtin_gallery();
    let project = project_with_most_images(&state);

    state.handle(Message::OpenProject(project.id()));
    state.handle(Message::PreviousImage);
    assert_eq!(state.viewer().index(), Some(project.image_count() - 1));
}

#[test]
fn switching_projects_resets_index() {
    let (mut state, page) = builtin_gallery();
    let ids: Vec<_> = state.projects().iter().map(|p| p.id()).collect();

    state.handle(Message::OpenProject(ids[0]));
    state.handle(Message::NextImage);
    state.handle(Message::OpenProject(ids[1]));

    assert_eq!(state.viewer().project().map(|p| p.id()), Some(ids[1]));
    assert_eq!(state.viewer().index(), Some(0));
    assert!(!page.is_enabled());
}

#[test]
fn keyboard_session_ends_with_scrolling_restored() {
    let (mut state, page) = builtin_gallery();
    let project = project_with_most_images(&state);

    assert_eq!(
        state.handle(Message::OpenProject(project.id())),
        Effect::Opened(project.id())
    );
    assert!(!page.is_enabled());

    state.handle(Message::KeyPressed(GalleryKey::ArrowRight));
    state.handle(Message::KeyPressed(GalleryKey::ArrowRight));
    state.handle(Message::KeyPressed(GalleryKey::ArrowLeft));
    assert_eq!(state.viewer().index(), Some(1));

    assert_eq!(
        state.handle(Message::KeyPressed(GalleryKey::Escape)),
        Effect::Closed(CloseTrigger::Escape)
    );
    assert_eq!(state.viewer(), &ViewerState::Closed);
    assert!(page.is_enabled());
}

#[test]
fn indicators_track_jumps() {
    let (mut state, _page) = builtin_gallery();
    let project = project_with_most_images(&state);

    state.handle(Message::OpenProject(project.id()));
    state.handle(Message::JumpToImage(3));

    let snapshot = state.snapshot().expect("viewer is open");
    assert_eq!(snapshot.indicators.len(), project.image_count());
    let active: Vec<_> = snapshot
        .indicators
        .iter()
        .filter(|i| i.active)
        .map(|i| i.index)
        .collect();
    assert_eq!(active, vec![3]);
    assert_eq!(snapshot.image, project.images()[3].as_path());
}

#[test]
fn controls_hidden_exactly_for_single_image_projects() {
    let single = Project::new(1, "One", "Solo", "", vec!["only.png".into()]).expect("valid");
    let pair = Project::new(2, "Two", "Duo", "", vec!["a.png".into(), "b.png".into()])
        .expect("valid");

    let hidden = ViewerSnapshot::new(&single, 0, 1.0).expect("in range");
    let shown = ViewerSnapshot::new(&pair, 0, 1.0).expect("in range");

    assert!(!hidden.show_navigation && hidden.indicators.is_empty());
    assert!(shown.show_navigation && shown.indicators.len() == 2);
}

#[test]
fn dropping_gallery_mid_session_releases_scroll_lock() {
    let (mut state, page) = builtin_gallery();
    let id = state.projects()[0].id();
    state.handle(Message::OpenProject(id));
    assert!(!page.is_enabled());

    drop(state);
    assert!(page.is_enabled());
}
