// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Loading placeholder shown until the loading gate fires.

use super::theme;

/// Display grey placeholder bars in the hero and carousel layout.
/// `elapsed` drives the shimmer between the base and highlight colors.
pub fn show(ui: &mut egui::Ui, elapsed: f32, card_width: f32, card_spacing: f32) {
    let shimmer = ((elapsed * 3.0).sin() * 0.5 + 0.5).clamp(0.0, 1.0);
    let color = lerp(theme::SKELETON_BASE, theme::SKELETON_HIGHLIGHT, shimmer);

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_max_width(theme::HERO_MAX_WIDTH);
            ui.set_min_height(400.0);
            circle(ui, 32.0, color);
            ui.add_space(16.0);
            bar(ui, 200.0, 32.0, color);
            ui.add_space(8.0);
            bar(ui, 300.0, 16.0, color);
            ui.add_space(16.0);
            bar(ui, 100.0, 32.0, color);
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            bar(ui, 108.0, 28.0, color);
            ui.add_space(16.0);
            bar(ui, theme::THUMBNAIL_WIDTH, theme::THUMBNAIL_HEIGHT, color);
        });
    });

    ui.add_space(20.0);
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = card_spacing;
        for _ in 0..theme::SKELETON_CARDS {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(card_width, theme::CARD_HEIGHT),
                egui::Sense::hover(),
            );
            let painter = ui.painter();
            painter.rect_filled(rect, theme::CARD_ROUNDING, theme::CARD_FILL);

            let left = rect.min.x + theme::CARD_PADDING;
            let top = rect.min.y + theme::CARD_PADDING;
            painter.circle_filled(egui::pos2(left + 16.0, top + 16.0), 16.0, color);
            let title = egui::Rect::from_min_size(egui::pos2(left, top + 40.0), egui::vec2(150.0, 16.0));
            painter.rect_filled(title, 4.0, color);
            let subtitle = egui::Rect::from_min_size(egui::pos2(left, top + 60.0), egui::vec2(200.0, 12.0));
            painter.rect_filled(subtitle, 4.0, color);
        }
    });

    ui.ctx().request_repaint();
}

fn bar(ui: &mut egui::Ui, width: f32, height: f32, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    ui.painter().rect_filled(rect, 4.0, color);
}

fn circle(ui: &mut egui::Ui, diameter: f32, color: egui::Color32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(diameter, diameter), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), diameter / 2.0, color);
}

fn lerp(a: egui::Color32, b: egui::Color32, t: f32) -> egui::Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    egui::Color32::from_rgb(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}
