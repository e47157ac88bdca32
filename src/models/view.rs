// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Typed view models.
//!
//! Each view model is built field by field from a [`ProjectRecord`], so the
//! UI only ever sees what it renders.

use super::project::{ProjectRecord, SCORE_MAX, SCORE_MIN};

/// Number of stars in a rating badge.
pub const STAR_COUNT: usize = 5;

/// Score badge: formatted value plus filled-star count.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingView {
    pub label: &'static str,
    pub text: String,
    pub filled_stars: usize,
}

impl RatingView {
    pub fn new(label: &'static str, score: f64) -> Self {
        let score = if score.is_finite() {
            score.clamp(SCORE_MIN, SCORE_MAX)
        } else {
            SCORE_MIN
        };
        Self {
            label,
            text: format!("{:.1}", score),
            filled_stars: (score.floor() as usize).min(STAR_COUNT),
        }
    }
}

/// A card in the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: u32,
    pub logo: String,
    pub title: String,
    pub description: String,
    /// Card background locator; empty when the project has none
    pub background: String,
    pub is_selected: bool,
    /// Seconds after the carousel appears before this card starts fading in.
    pub fade_delay: f32,
}

impl CardView {
    pub fn new(record: &ProjectRecord, is_selected: bool, fade_delay: f32) -> Self {
        Self {
            id: record.id,
            logo: record.logo.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            background: record.background_card_image.clone(),
            is_selected,
            fade_delay,
        }
    }
}

/// The hero panel for the selected project.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroView {
    pub id: u32,
    pub logo: String,
    pub title: String,
    pub video_thumbnail: String,
    /// Full-window backdrop locator
    pub backdrop: String,
    pub rating: RatingView,
    pub breakdown: Vec<RatingView>,
}

impl From<&ProjectRecord> for HeroView {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            id: record.id,
            logo: record.logo.clone(),
            title: record.title.clone(),
            video_thumbnail: record.video_thumbnail.clone(),
            backdrop: record.background_image.clone(),
            rating: RatingView::new("Quality", record.rating),
            breakdown: record
                .scores()
                .iter()
                .skip(1)
                .map(|(label, score)| RatingView::new(label, *score))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::sample_record;

    #[test]
    fn test_rating_stars_follow_floor_of_score() {
        assert_eq!(RatingView::new("Quality", 4.8).filled_stars, 4);
        assert_eq!(RatingView::new("Quality", 5.0).filled_stars, 5);
        assert_eq!(RatingView::new("Quality", 0.4).filled_stars, 0);
        assert_eq!(RatingView::new("Quality", 4.8).text, "4.8");
    }

    #[test]
    fn test_rating_clamps_out_of_range_scores() {
        let high = RatingView::new("Cost", 9.0);
        assert_eq!(high.text, "5.0");
        assert_eq!(high.filled_stars, STAR_COUNT);

        let low = RatingView::new("Cost", -1.0);
        assert_eq!(low.text, "0.0");
        assert_eq!(low.filled_stars, 0);

        assert_eq!(RatingView::new("Cost", f64::NAN).filled_stars, 0);
    }

    #[test]
    fn test_hero_view_maps_record_fields() {
        let record = sample_record(3);
        let hero = HeroView::from(&record);
        assert_eq!(hero.id, 3);
        assert_eq!(hero.video_thumbnail, record.video_thumbnail);
        assert_eq!(hero.backdrop, "bg-3.jpg");
        assert_eq!(hero.rating.text, "4.5");
        assert_eq!(hero.breakdown.len(), 4);
        assert_eq!(hero.breakdown[0].label, "Quality");
    }

    #[test]
    fn test_card_view_carries_selection() {
        let card = CardView::new(&sample_record(2), true, 0.1);
        assert!(card.is_selected);
        assert_eq!(card.logo, "logo-2.png");
        assert_eq!(card.background, "card-2.jpg");
    }
}
