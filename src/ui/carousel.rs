// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Horizontally scrolling project carousel.
//!
//! This module draws the pagination dots, the card strip and the page
//! buttons, and turns raw pointer input over the strip into dashboard
//! events. It never changes state itself.

use super::theme;
use crate::models::view::CardView;
use crate::state::carousel::Pagination;
use crate::state::DashboardEvent;
use crate::util::animation::fade_alpha;

/// Everything the carousel needs to draw one frame.
pub struct CarouselFrame<'a> {
    pub cards: &'a [CardView],
    pub pagination: Pagination,
    pub can_page_left: bool,
    pub can_page_right: bool,
    pub is_dragging: bool,
    /// Offset to force onto the scroll area this frame
    pub scroll_to: Option<f32>,
    /// Seconds since the carousel first appeared
    pub elapsed: f32,
    pub fade_secs: f32,
    pub card_width: f32,
    pub card_spacing: f32,
}

/// Display the carousel and collect the events it produced.
pub fn show(ui: &mut egui::Ui, frame: &CarouselFrame, events: &mut Vec<DashboardEvent>) {
    pagination_dots(ui, frame.pagination);
    ui.add_space(16.0);

    let mut area = egui::ScrollArea::horizontal()
        .id_source("project_carousel")
        .drag_to_scroll(false)
        .scroll_bar_visibility(egui::scroll_area::ScrollBarVisibility::AlwaysHidden);
    if let Some(offset) = frame.scroll_to {
        area = area.horizontal_scroll_offset(offset);
    }

    let output = area.show(ui, |ui| {
        ui.spacing_mut().item_spacing.x = frame.card_spacing;
        ui.with_layout(egui::Layout::left_to_right(egui::Align::Max), |ui| {
            for card in frame.cards {
                if card_widget(ui, card, frame).clicked() {
                    events.push(DashboardEvent::SelectCard(card.id));
                }
            }
        });
    });

    let viewport = output.inner_rect;
    events.push(DashboardEvent::Resized {
        width: viewport.width(),
        left: viewport.min.x,
    });
    events.push(DashboardEvent::Scrolled(output.state.offset.x));

    pointer_events(ui, viewport, frame.is_dragging, events);
    page_buttons(ui, viewport, frame, events);
}

fn pagination_dots(ui: &mut egui::Ui, pagination: Pagination) {
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        // Right-to-left layout: draw the last dot first.
        for index in (0..pagination.total).rev() {
            let (rect, _) = ui.allocate_exact_size(
                egui::vec2(theme::DOT_WIDTH, theme::DOT_HEIGHT),
                egui::Sense::hover(),
            );
            let color = if index == pagination.current {
                egui::Color32::WHITE
            } else {
                theme::DOT_INACTIVE
            };
            ui.painter().rect_filled(rect, theme::DOT_HEIGHT / 2.0, color);
        }
    });
}

fn card_widget(ui: &mut egui::Ui, card: &CardView, frame: &CarouselFrame) -> egui::Response {
    let height = if card.is_selected {
        theme::SELECTED_CARD_HEIGHT
    } else {
        theme::CARD_HEIGHT
    };
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(frame.card_width, height), egui::Sense::click());

    let alpha = fade_alpha(frame.elapsed, card.fade_delay, frame.fade_secs);
    if alpha <= 0.0 || !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    let draw_rect = if response.hovered() && !card.is_selected {
        rect.expand2(egui::vec2(0.0, 2.0))
    } else {
        rect
    };
    painter.rect_filled(draw_rect, theme::CARD_ROUNDING, theme::CARD_FILL.gamma_multiply(alpha));
    if card.is_selected {
        painter.rect_stroke(
            draw_rect,
            theme::CARD_ROUNDING,
            egui::Stroke::new(2.0, theme::ACCENT.gamma_multiply(alpha)),
        );
    }

    let wrap_width = frame.card_width - 2.0 * theme::CARD_PADDING;
    let mut cursor = draw_rect.min + egui::vec2(theme::CARD_PADDING, theme::CARD_PADDING);
    if card.is_selected {
        cursor.y += 24.0;
    }

    let logo = egui::Rect::from_min_size(cursor, egui::vec2(32.0, 32.0));
    painter.rect_filled(logo, 4.0, theme::ACCENT.gamma_multiply(alpha));
    ui.interact(logo, response.id.with("logo"), egui::Sense::hover())
        .on_hover_text(&card.logo);
    cursor.y += 40.0;

    let title = painter.layout(
        card.title.clone(),
        egui::FontId::proportional(14.0),
        egui::Color32::WHITE.gamma_multiply(alpha),
        wrap_width,
    );
    let title_height = title.size().y;
    painter.galley(cursor, title, egui::Color32::WHITE);
    cursor.y += title_height + 4.0;

    let description = painter.layout(
        card.description.clone(),
        egui::FontId::proportional(12.0),
        theme::MUTED_TEXT.gamma_multiply(alpha),
        wrap_width,
    );
    painter.galley(cursor, description, theme::MUTED_TEXT);

    if alpha < 1.0 {
        ui.ctx().request_repaint();
    }

    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    if card.background.is_empty() {
        response
    } else {
        response.on_hover_text(&card.background)
    }
}

/// Translate primary-button input over the strip into drag events.
fn pointer_events(
    ui: &egui::Ui,
    viewport: egui::Rect,
    is_dragging: bool,
    events: &mut Vec<DashboardEvent>,
) {
    let (pressed, released, down, moved, position) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.primary_down(),
            i.pointer.delta().x != 0.0,
            i.pointer.hover_pos(),
        )
    });
    let inside = position.filter(|p| viewport.contains(*p));

    if !is_dragging {
        if let (true, Some(pos)) = (pressed, inside) {
            events.push(DashboardEvent::DragStart(pos.x));
        }
        return;
    }

    match inside {
        None => events.push(DashboardEvent::DragCancel),
        Some(_) if released || !down => events.push(DashboardEvent::DragEnd),
        Some(pos) => {
            if moved {
                events.push(DashboardEvent::DragMove(pos.x));
            }
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        }
    }
}

fn page_buttons(
    ui: &mut egui::Ui,
    viewport: egui::Rect,
    frame: &CarouselFrame,
    events: &mut Vec<DashboardEvent>,
) {
    let size = egui::vec2(32.0, 32.0);
    let y = viewport.center().y - size.y / 2.0;

    if frame.can_page_left {
        let rect = egui::Rect::from_min_size(egui::pos2(viewport.min.x, y), size);
        if ui.put(rect, page_button("<")).clicked() {
            events.push(DashboardEvent::PageLeft);
        }
    }
    if frame.can_page_right {
        let rect = egui::Rect::from_min_size(egui::pos2(viewport.max.x - size.x, y), size);
        if ui.put(rect, page_button(">")).clicked() {
            events.push(DashboardEvent::PageRight);
        }
    }
}

fn page_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text).color(egui::Color32::WHITE))
        .fill(egui::Color32::from_black_alpha(128))
        .rounding(16.0)
}
