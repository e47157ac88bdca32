// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Arrow-key navigation between adjacent projects.
//!
//! Moves are clamped at both ends of the catalog; there is no wraparound.

use super::carousel::CarouselController;
use super::selection::SelectionModel;

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl From<egui::Key> for NavKey {
    fn from(key: egui::Key) -> Self {
        match key {
            egui::Key::ArrowLeft => NavKey::ArrowLeft,
            egui::Key::ArrowRight => NavKey::ArrowRight,
            _ => NavKey::Other,
        }
    }
}

/// What a key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Selection moved to `id` and the carousel was asked to bring it into view
    Moved { id: u32 },
    /// At a boundary, or not a navigation key
    Ignored,
}

/// Apply a key press to the selection and carousel.
pub fn navigate(
    key: NavKey,
    selection: &mut SelectionModel,
    carousel: &mut CarouselController,
) -> NavOutcome {
    let position = selection.position();
    let target = match key {
        NavKey::ArrowLeft => position.checked_sub(1),
        NavKey::ArrowRight => Some(position + 1).filter(|p| *p < selection.catalog().len()),
        NavKey::Other => None,
    };

    let Some(target) = target else {
        return NavOutcome::Ignored;
    };
    if !selection.select_position(target) {
        return NavOutcome::Ignored;
    }

    let id = selection.selected().id;
    carousel.scroll_to_card(selection.catalog(), id);
    NavOutcome::Moved { id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::sample_catalog;
    use crate::state::carousel::CarouselLayout;
    use std::sync::Arc;

    fn setup(cards: u32) -> (SelectionModel, CarouselController) {
        let selection = SelectionModel::new(Arc::new(sample_catalog(cards)));
        let mut carousel = CarouselController::new(
            CarouselLayout {
                card_width: 290.0,
                card_spacing: 16.0,
                drag_speed: 2.0,
            },
            cards as usize,
        );
        carousel.on_viewport_resize(1200.0);
        (selection, carousel)
    }

    #[test]
    fn test_three_right_presses_select_fourth_card() {
        let (mut selection, mut carousel) = setup(9);
        let mut last = NavOutcome::Ignored;
        for _ in 0..3 {
            last = navigate(NavKey::ArrowRight, &mut selection, &mut carousel);
        }

        assert_eq!(selection.selected().id, 4);
        assert_eq!(last, NavOutcome::Moved { id: 4 });
        assert_eq!(carousel.pending_request().map(|r| r.offset), Some(918.0));
    }

    #[test]
    fn test_right_stops_at_last_project() {
        let (mut selection, mut carousel) = setup(9);
        let mut reached_last = 0;
        for _ in 0..8 {
            navigate(NavKey::ArrowRight, &mut selection, &mut carousel);
            if selection.selected().id == 9 {
                reached_last += 1;
            }
        }
        assert_eq!(reached_last, 1);

        let outcome = navigate(NavKey::ArrowRight, &mut selection, &mut carousel);
        assert_eq!(outcome, NavOutcome::Ignored);
        assert_eq!(selection.selected().id, 9);
    }

    #[test]
    fn test_left_at_first_project_is_noop() {
        let (mut selection, mut carousel) = setup(9);
        let outcome = navigate(NavKey::ArrowLeft, &mut selection, &mut carousel);
        assert_eq!(outcome, NavOutcome::Ignored);
        assert_eq!(selection.selected().id, 1);
        assert!(carousel.pending_request().is_none());
    }

    #[test]
    fn test_other_keys_ignored() {
        let (mut selection, mut carousel) = setup(9);
        assert_eq!(
            navigate(NavKey::from(egui::Key::Enter), &mut selection, &mut carousel),
            NavOutcome::Ignored
        );
        assert_eq!(NavKey::from(egui::Key::ArrowLeft), NavKey::ArrowLeft);
    }

    #[test]
    fn test_left_moves_back() {
        let (mut selection, mut carousel) = setup(9);
        selection.select(6);
        let outcome = navigate(NavKey::ArrowLeft, &mut selection, &mut carousel);
        assert_eq!(outcome, NavOutcome::Moved { id: 5 });
    }
}
