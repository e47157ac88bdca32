// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video overlay.
//!
//! Dims the whole window and shows the playback surface for the bound
//! video session with a close button.

use crate::state::modal::VideoSession;

/// Result of overlay interaction.
pub enum ModalAction {
    None,
    Close,
}

const MAX_WIDTH: f32 = 896.0;

/// Display the overlay for `session`. `playing` is the source the playback
/// backend reports as active.
pub fn show(ctx: &egui::Context, session: &VideoSession, playing: Option<&str>) -> ModalAction {
    let mut action = ModalAction::None;
    let screen = ctx.screen_rect();

    // Backdrop; swallows clicks aimed at the dashboard underneath.
    egui::Area::new(egui::Id::new("video_backdrop"))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            ui.allocate_rect(screen, egui::Sense::click());
            ui.painter()
                .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(190));
        });

    let width = (screen.width() - 32.0).clamp(160.0, MAX_WIDTH);
    let height = width * 9.0 / 16.0;

    egui::Area::new(egui::Id::new("video_modal"))
        .order(egui::Order::Tooltip)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, egui::Color32::BLACK);
            let status = match playing {
                Some(source) => format!("▶  {}", source),
                None => format!("Loading {}", session.video_src),
            };
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                status,
                egui::FontId::proportional(18.0),
                egui::Color32::from_gray(200),
            );

            let close_rect = egui::Rect::from_min_size(
                egui::pos2(rect.max.x - 48.0, rect.min.y + 16.0),
                egui::vec2(32.0, 32.0),
            );
            let close = egui::Button::new(
                egui::RichText::new("✕").size(20.0).color(egui::Color32::WHITE),
            )
            .frame(false);
            if ui.put(close_rect, close).clicked() {
                action = ModalAction::Close;
            }
        });

    action
}
