// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Selected project's backdrop behind the dashboard.

use super::theme;
use crate::util::animation::fade_alpha;

/// Paint the backdrop placeholder for `locator` over the panel, then the dim
/// layer. `since_selected` is the time in seconds since the selection changed.
pub fn show(ui: &egui::Ui, locator: &str, since_selected: f32) {
    let rect = ui.clip_rect();
    let painter = ui.painter();
    let alpha = fade_alpha(since_selected, 0.0, theme::BACKDROP_FADE_SECS);

    painter.rect_filled(rect, 0.0, theme::BACKDROP_FILL.gamma_multiply(alpha));
    painter.text(
        rect.right_bottom() - egui::vec2(12.0, 12.0),
        egui::Align2::RIGHT_BOTTOM,
        locator,
        egui::FontId::proportional(11.0),
        theme::MUTED_TEXT.gamma_multiply(alpha * 0.5),
    );
    painter.rect_filled(rect, 0.0, theme::BACKDROP_DIM);

    if alpha < 1.0 {
        ui.ctx().request_repaint();
    }
}
