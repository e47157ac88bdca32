// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Carousel scroll, drag and pagination state.
//!
//! The controller never scrolls anything itself. It records measured
//! viewport state, derives pagination from it and queues a
//! [`ScrollRequest`] that the view applies to the real scroll area. The
//! derived scroll index and the actual offset may disagree while a smooth
//! request is in flight; the next scroll-position update reconciles them.

use crate::config::DashboardConfig;
use crate::models::project::ProjectCatalog;
use crate::util::geometry;

/// How a requested scroll should reach its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// A scroll the view should perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub offset: f32,
    pub behavior: ScrollBehavior,
}

/// Pagination dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current: usize,
    pub total: usize,
}

/// Pointer drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    /// Pointer x relative to the viewport's left edge at drag start
    start_x: f32,
    /// Scroll offset at drag start
    scroll_start: f32,
}

/// Fixed layout inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselLayout {
    pub card_width: f32,
    pub card_spacing: f32,
    pub drag_speed: f32,
}

impl From<&DashboardConfig> for CarouselLayout {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            card_width: config.card_width,
            card_spacing: config.card_spacing,
            drag_speed: config.drag_speed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    layout: CarouselLayout,
    card_count: usize,
    viewport_width: f32,
    viewport_left: f32,
    scroll_offset: f32,
    visible: usize,
    scroll_index: usize,
    drag: Option<DragState>,
    pending: Option<ScrollRequest>,
}

impl CarouselController {
    pub fn new(layout: CarouselLayout, card_count: usize) -> Self {
        Self {
            layout,
            card_count,
            viewport_width: 0.0,
            viewport_left: 0.0,
            scroll_offset: 0.0,
            visible: 1,
            scroll_index: 0,
            drag: None,
            pending: None,
        }
    }

    #[cfg(test)]
    pub fn visible_card_count(&self) -> usize {
        self.visible
    }

    #[cfg(test)]
    pub fn scroll_index(&self) -> usize {
        self.scroll_index
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Width of all cards laid out with spacing between them.
    pub fn content_width(&self) -> f32 {
        if self.card_count == 0 {
            return 0.0;
        }
        self.card_count as f32 * (self.layout.card_width + self.layout.card_spacing)
            - self.layout.card_spacing
    }

    pub fn max_scroll(&self) -> f32 {
        (self.content_width() - self.viewport_width.max(0.0)).max(0.0)
    }

    /// Recompute how many cards make up one page.
    pub fn on_viewport_resize(&mut self, width: f32) {
        let visible = geometry::visible_card_count(width, self.layout.card_width);
        if visible != self.visible {
            log::debug!("Viewport {}px shows {} cards", width, visible);
        }
        self.viewport_width = width.max(0.0);
        self.visible = visible;
    }

    /// Screen x of the viewport's left edge; pointer positions are taken relative to it.
    pub fn set_viewport_left(&mut self, left: f32) {
        self.viewport_left = left;
    }

    pub fn on_drag_start(&mut self, pointer_x: f32) {
        self.drag = Some(DragState {
            start_x: pointer_x - self.viewport_left,
            scroll_start: self.scroll_offset,
        });
    }

    /// Returns the new offset, or `None` when no drag is in progress.
    /// A move that leaves the offset unchanged queues no request, so a
    /// pending smooth scroll survives a stationary press.
    pub fn on_drag_move(&mut self, pointer_x: f32) -> Option<f32> {
        let drag = self.drag?;
        let x = pointer_x - self.viewport_left;
        let delta = (x - drag.start_x) * self.layout.drag_speed;
        let offset = geometry::clamp_offset(drag.scroll_start - delta, self.max_scroll());
        if offset == self.scroll_offset {
            return Some(offset);
        }
        log::debug!("Drag to offset {:.1}", offset);

        self.scroll_offset = offset;
        self.pending = Some(ScrollRequest {
            offset,
            behavior: ScrollBehavior::Instant,
        });
        Some(offset)
    }

    pub fn on_drag_end(&mut self) {
        self.drag = None;
    }

    /// Pointer left the viewport mid-drag.
    pub fn on_drag_cancel(&mut self) {
        self.on_drag_end();
    }

    /// Measured scroll position changed; updates the advisory scroll index.
    pub fn on_scroll_position_changed(&mut self, offset: f32) {
        self.scroll_offset = geometry::clamp_offset(offset, f32::MAX);
        self.scroll_index =
            geometry::scroll_index_for_offset(self.scroll_offset, self.layout.card_width, self.card_count);
    }

    pub fn can_page_left(&self) -> bool {
        self.scroll_index > 0
    }

    pub fn can_page_right(&self) -> bool {
        self.scroll_index + self.visible < self.card_count
    }

    /// Move one viewport width to the right.
    pub fn page_right(&mut self) -> ScrollRequest {
        let max_index = geometry::max_scroll_index(self.card_count, self.visible);
        self.scroll_index = (self.scroll_index + self.visible).min(max_index);
        self.request_smooth(self.scroll_offset + self.viewport_width)
    }

    /// Move one viewport width to the left.
    pub fn page_left(&mut self) -> ScrollRequest {
        self.scroll_index = self.scroll_index.saturating_sub(self.visible);
        self.request_smooth(self.scroll_offset - self.viewport_width)
    }

    /// Scroll so the card at `position` sits at the viewport's left edge.
    pub fn scroll_to_position(&mut self, position: usize) -> Option<ScrollRequest> {
        if position >= self.card_count {
            return None;
        }
        let offset = geometry::card_offset(position, self.layout.card_width, self.layout.card_spacing);
        Some(self.request_smooth(offset))
    }

    /// Scroll to the card with `id`. Unknown ids are ignored.
    pub fn scroll_to_card(&mut self, catalog: &ProjectCatalog, id: u32) -> Option<ScrollRequest> {
        match catalog.position_of(id) {
            Some(position) => self.scroll_to_position(position),
            None => {
                log::warn!("Ignoring scroll to unknown card {}", id);
                None
            }
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            current: geometry::current_step(self.scroll_index, self.visible, self.card_count),
            total: geometry::total_steps(self.card_count, self.visible),
        }
    }

    /// The most recent request, if the view has not consumed it yet.
    #[cfg(test)]
    pub fn pending_request(&self) -> Option<ScrollRequest> {
        self.pending
    }

    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending.take()
    }

    fn request_smooth(&mut self, offset: f32) -> ScrollRequest {
        let request = ScrollRequest {
            offset: geometry::clamp_offset(offset, self.max_scroll()),
            behavior: ScrollBehavior::Smooth,
        };
        log::debug!("Requesting smooth scroll to {:.1}", request.offset);
        self.pending = Some(request);
        request
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::sample_catalog;

    fn layout() -> CarouselLayout {
        CarouselLayout {
            card_width: 290.0,
            card_spacing: 16.0,
            drag_speed: 2.0,
        }
    }

    fn controller(cards: usize, width: f32) -> CarouselController {
        let mut carousel = CarouselController::new(layout(), cards);
        carousel.on_viewport_resize(width);
        carousel
    }

    #[test]
    fn test_resize_updates_pagination() {
        let carousel = controller(9, 1200.0);
        assert_eq!(carousel.visible_card_count(), 4);
        assert_eq!(carousel.pagination(), Pagination { current: 0, total: 3 });
    }

    #[test]
    fn test_zero_width_keeps_one_card() {
        let mut carousel = controller(9, 0.0);
        assert_eq!(carousel.visible_card_count(), 1);
        carousel.on_viewport_resize(-20.0);
        assert_eq!(carousel.visible_card_count(), 1);
        assert_eq!(carousel.pagination().total, 9);
    }

    #[test]
    fn test_page_left_then_right_restores_index() {
        let mut carousel = controller(15, 600.0);
        carousel.on_scroll_position_changed(5.0 * 290.0);
        assert_eq!(carousel.scroll_index(), 5);
        let before = carousel.pagination().current;

        carousel.page_left();
        assert_eq!(carousel.scroll_index(), 3);
        carousel.page_right();
        assert_eq!(carousel.scroll_index(), 5);
        assert_eq!(carousel.pagination().current, before);

        carousel.page_right();
        carousel.page_left();
        assert_eq!(carousel.scroll_index(), 5);
    }

    #[test]
    fn test_page_moves_clamp_at_boundaries() {
        let mut carousel = controller(9, 1200.0);
        carousel.page_left();
        assert_eq!(carousel.scroll_index(), 0);
        assert!(!carousel.can_page_left());

        carousel.page_right();
        assert_eq!(carousel.scroll_index(), 4);
        carousel.page_right();
        assert_eq!(carousel.scroll_index(), 5);
        assert!(!carousel.can_page_right());
    }

    #[test]
    fn test_page_right_requests_one_viewport_width() {
        let mut carousel = controller(15, 1200.0);
        carousel.on_scroll_position_changed(100.0);
        let request = carousel.page_right();
        assert_eq!(request.offset, 1300.0);
        assert_eq!(request.behavior, ScrollBehavior::Smooth);
        assert_eq!(carousel.take_scroll_request(), Some(request));
        assert_eq!(carousel.take_scroll_request(), None);
    }

    #[test]
    fn test_page_requests_stay_within_scroll_range() {
        let mut carousel = controller(9, 1200.0);
        let request = carousel.page_left();
        assert_eq!(request.offset, 0.0);

        carousel.on_scroll_position_changed(carousel.max_scroll() - 10.0);
        let request = carousel.page_right();
        assert_eq!(request.offset, carousel.max_scroll());
    }

    #[test]
    fn test_drag_scrolls_twice_as_fast() {
        let mut carousel = controller(15, 1200.0);
        carousel.set_viewport_left(64.0);
        carousel.on_scroll_position_changed(500.0);

        carousel.on_drag_start(400.0);
        assert!(carousel.is_dragging());
        assert_eq!(carousel.on_drag_move(350.0), Some(600.0));
        assert_eq!(carousel.on_drag_move(450.0), Some(400.0));
        assert_eq!(
            carousel.take_scroll_request().map(|r| r.behavior),
            Some(ScrollBehavior::Instant)
        );

        // Dragging past the start clamps at zero.
        assert_eq!(carousel.on_drag_move(2000.0), Some(0.0));

        carousel.on_drag_end();
        assert!(!carousel.is_dragging());
        assert_eq!(carousel.on_drag_move(100.0), None);
    }

    #[test]
    fn test_drag_cancel_ends_drag() {
        let mut carousel = controller(9, 1200.0);
        carousel.on_drag_start(10.0);
        carousel.on_drag_cancel();
        assert!(!carousel.is_dragging());
        assert!(carousel.on_drag_move(50.0).is_none());
    }

    #[test]
    fn test_stationary_press_keeps_smooth_scroll() {
        let mut carousel = controller(15, 1200.0);
        let smooth = carousel.page_right();
        assert_eq!(smooth.behavior, ScrollBehavior::Smooth);

        carousel.on_drag_start(500.0);
        assert_eq!(carousel.on_drag_move(500.0), Some(0.0));
        assert_eq!(carousel.pending_request(), Some(smooth));

        carousel.on_drag_move(450.0);
        assert_eq!(
            carousel.take_scroll_request(),
            Some(ScrollRequest {
                offset: 100.0,
                behavior: ScrollBehavior::Instant,
            })
        );
    }

    #[test]
    fn test_scroll_to_card_uses_card_position() {
        let catalog = sample_catalog(9);
        let mut carousel = controller(9, 1200.0);

        let request = carousel.scroll_to_card(&catalog, 4).unwrap();
        assert_eq!(request.offset, 918.0);
        assert!(carousel.scroll_to_card(&catalog, 10).is_none());
        assert!(carousel.scroll_to_position(9).is_none());
    }

    #[test]
    fn test_scroll_position_updates_index() {
        let mut carousel = controller(9, 1200.0);
        carousel.on_scroll_position_changed(870.0);
        assert_eq!(carousel.scroll_index(), 3);
        assert_eq!(carousel.pagination().current, 1);
        carousel.on_scroll_position_changed(-30.0);
        assert_eq!(carousel.scroll_index(), 0);
    }
}
