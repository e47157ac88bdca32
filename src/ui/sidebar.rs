// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Left navigation sidebar.

use super::theme;

/// Sidebar entries: glyph and hover text.
const ITEMS: [(&str, &str); 5] = [
    ("◆", "Logo"),
    ("▣", "Work"),
    ("☺", "People"),
    ("☰", "Layers"),
    ("✉", "Mail"),
];

/// Display the sidebar icon column.
pub fn show(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.spacing_mut().item_spacing.y = 16.0;

        for (glyph, label) in ITEMS {
            let size = egui::vec2(theme::SIDEBAR_ITEM, theme::SIDEBAR_ITEM);
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

            let fill = if response.is_pointer_button_down_on() {
                theme::ACCENT_HOVER.linear_multiply(1.2)
            } else if response.hovered() {
                theme::ACCENT_HOVER
            } else {
                egui::Color32::TRANSPARENT
            };
            ui.painter().rect_filled(rect, 4.0, fill);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                glyph,
                egui::FontId::proportional(22.0),
                egui::Color32::WHITE,
            );

            response.on_hover_text(label);
        }
    });
}
