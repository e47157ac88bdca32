// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hero panel for the selected project.
//!
//! Shows the project's logo, title and call to action on the left, and the
//! video thumbnail with its rating badge on the right.

use super::theme;
use crate::models::view::{HeroView, RatingView, STAR_COUNT};

const TAGLINE: &str = "An aerospace manufacturing company hired Inceptiv Inc. to design a \
                       digital flight demand and operations experience.";

/// Result of hero panel interaction.
pub enum HeroAction {
    None,
    OpenVideo,
}

/// Display the hero panel.
pub fn show(ui: &mut egui::Ui, hero: &HeroView) -> HeroAction {
    let mut action = HeroAction::None;

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_max_width(theme::HERO_MAX_WIDTH);
            ui.set_min_height(400.0);

            logo(ui, &hero.logo);
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new(&hero.title)
                    .size(28.0)
                    .strong()
                    .color(egui::Color32::WHITE),
            );
            ui.add_space(8.0);
            ui.label(egui::RichText::new(TAGLINE).color(theme::MUTED_TEXT));
            ui.add_space(16.0);

            let case_study = egui::Button::new(
                egui::RichText::new("Case Study").color(egui::Color32::WHITE),
            )
            .fill(theme::ACCENT)
            .min_size(egui::vec2(100.0, 32.0));
            if ui.add(case_study).clicked() {
                log::info!("Case study requested for project {}", hero.id);
            }
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            rating_badge(ui, &hero.rating, &hero.breakdown);
            ui.add_space(16.0);
            if thumbnail(ui, &hero.video_thumbnail).clicked() {
                action = HeroAction::OpenVideo;
            }
        });
    });

    action
}

/// Square logo placeholder labelled with the locator's file name.
fn logo(ui: &mut egui::Ui, locator: &str) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(32.0, 32.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 4.0, theme::CARD_FILL);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "◆",
        egui::FontId::proportional(18.0),
        theme::ACCENT,
    );
    response.on_hover_text(locator);
}

/// Video thumbnail with a play button overlay.
fn thumbnail(ui: &mut egui::Ui, locator: &str) -> egui::Response {
    let size = egui::vec2(theme::THUMBNAIL_WIDTH, theme::THUMBNAIL_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let painter = ui.painter();

    painter.rect_filled(rect, theme::CARD_ROUNDING, theme::CARD_FILL);
    let shade = if response.hovered() { 90 } else { 128 };
    painter.rect_filled(
        rect,
        theme::CARD_ROUNDING,
        egui::Color32::from_black_alpha(shade),
    );

    // Play triangle
    let c = rect.center();
    let r = 20.0;
    painter.add(egui::Shape::convex_polygon(
        vec![
            egui::pos2(c.x - r * 0.6, c.y - r),
            egui::pos2(c.x + r, c.y),
            egui::pos2(c.x - r * 0.6, c.y + r),
        ],
        egui::Color32::WHITE,
        egui::Stroke::NONE,
    ));

    response
        .on_hover_text(locator)
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

fn stars(rating: &RatingView) -> String {
    (0..STAR_COUNT)
        .map(|i| if i < rating.filled_stars { '★' } else { '☆' })
        .collect()
}

/// White badge with the headline rating and the per-category breakdown.
fn rating_badge(ui: &mut egui::Ui, rating: &RatingView, breakdown: &[RatingView]) {
    egui::Frame::none()
        .fill(egui::Color32::WHITE)
        .rounding(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&rating.text).color(theme::STAR));
                ui.label(egui::RichText::new(stars(rating)).size(12.0).color(theme::STAR));
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(&rating.text).strong().color(egui::Color32::BLACK));
                    ui.label(egui::RichText::new(rating.label).small().color(egui::Color32::BLACK));
                });
            });

            if !breakdown.is_empty() {
                ui.separator();
                egui::Grid::new("score_breakdown")
                    .num_columns(2)
                    .spacing([12.0, 2.0])
                    .show(ui, |ui| {
                        for score in breakdown {
                            ui.label(egui::RichText::new(score.label).small().color(egui::Color32::DARK_GRAY));
                            ui.label(
                                egui::RichText::new(format!("{} {}", score.text, stars(score)))
                                    .small()
                                    .color(egui::Color32::BLACK),
                            );
                            ui.end_row();
                        }
                    });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_render_filled_then_empty() {
        assert_eq!(stars(&RatingView::new("Quality", 4.8)), "★★★★☆");
        assert_eq!(stars(&RatingView::new("Quality", 0.0)), "☆☆☆☆☆");
    }
}
