// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Carousel layout arithmetic.
//!
//! This module provides the pixel <-> card index conversions and the
//! pagination math used by the carousel. All functions are total: widths
//! of zero, negative or NaN never divide by zero or index out of bounds.

/// Number of whole cards that fit in a viewport, never less than one.
pub fn visible_card_count(viewport_width: f32, card_width: f32) -> usize {
    if !is_positive(viewport_width) || !is_positive(card_width) {
        return 1;
    }
    ((viewport_width / card_width).floor() as usize).max(1)
}

/// Card index nearest to a scroll offset, clamped to `[0, card_count - 1]`.
pub fn scroll_index_for_offset(offset: f32, card_width: f32, card_count: usize) -> usize {
    if !is_positive(offset) || !is_positive(card_width) || card_count == 0 {
        return 0;
    }
    ((offset / card_width).round() as usize).min(card_count - 1)
}

/// Scroll offset of the card at `position`.
pub fn card_offset(position: usize, card_width: f32, card_spacing: f32) -> f32 {
    position as f32 * (card_width + card_spacing)
}

/// Number of pagination dots.
pub fn total_steps(card_count: usize, visible: usize) -> usize {
    card_count.div_ceil(visible.max(1))
}

/// Highlighted pagination dot for a scroll index, clamped to the last dot.
pub fn current_step(scroll_index: usize, visible: usize, card_count: usize) -> usize {
    let visible = visible.max(1);
    let step = (scroll_index + visible - 1) / visible;
    step.min(total_steps(card_count, visible).saturating_sub(1))
}

/// Largest scroll index a page move may land on.
pub fn max_scroll_index(card_count: usize, visible: usize) -> usize {
    card_count.saturating_sub(visible.max(1))
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Clamp a scroll offset into `[0, max_scroll]`.
pub fn clamp_offset(offset: f32, max_scroll: f32) -> f32 {
    if !offset.is_finite() {
        return 0.0;
    }
    offset.clamp(0.0, max_scroll.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_count_never_zero() {
        for width in [-100.0, 0.0, 1.0, 289.0, 290.0, 1200.0, f32::NAN] {
            assert!(visible_card_count(width, 290.0) >= 1);
        }
        assert_eq!(visible_card_count(100.0, 0.0), 1);
    }

    #[test]
    fn test_wide_viewport_pagination() {
        let visible = visible_card_count(1200.0, 290.0);
        assert_eq!(visible, 4);
        assert_eq!(total_steps(9, visible), 3);
    }

    #[test]
    fn test_card_offset_includes_spacing() {
        assert_eq!(card_offset(3, 290.0, 16.0), 918.0);
        assert_eq!(card_offset(0, 290.0, 16.0), 0.0);
    }

    #[test]
    fn test_scroll_index_rounds_and_clamps() {
        assert_eq!(scroll_index_for_offset(0.0, 290.0, 9), 0);
        assert_eq!(scroll_index_for_offset(140.0, 290.0, 9), 0);
        assert_eq!(scroll_index_for_offset(150.0, 290.0, 9), 1);
        assert_eq!(scroll_index_for_offset(100_000.0, 290.0, 9), 8);
        assert_eq!(scroll_index_for_offset(-50.0, 290.0, 9), 0);
    }

    #[test]
    fn test_current_step_stays_within_dots() {
        assert_eq!(current_step(0, 4, 9), 0);
        assert_eq!(current_step(4, 4, 9), 1);
        assert_eq!(current_step(5, 4, 9), 2);
        assert_eq!(current_step(8, 4, 9), 2);
        assert_eq!(current_step(3, 0, 9), 3);
    }

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(-10.0, 500.0), 0.0);
        assert_eq!(clamp_offset(700.0, 500.0), 500.0);
        assert_eq!(clamp_offset(10.0, -5.0), 0.0);
        assert_eq!(clamp_offset(f32::INFINITY, 500.0), 0.0);
    }
}
