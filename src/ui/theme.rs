// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Colors and fixed sizes used across the dashboard views.

use egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
pub const CARD_FILL: Color32 = Color32::from_rgb(31, 41, 55);
pub const ACCENT: Color32 = Color32::from_rgb(220, 38, 38);
pub const ACCENT_HOVER: Color32 = Color32::from_rgb(153, 27, 27);
pub const SIDEBAR: Color32 = Color32::from_rgb(185, 28, 28);
pub const STAR: Color32 = Color32::from_rgb(250, 204, 21);
pub const MUTED_TEXT: Color32 = Color32::from_rgb(156, 163, 175);
pub const DOT_INACTIVE: Color32 = Color32::from_rgb(107, 114, 128);
pub const SKELETON_BASE: Color32 = Color32::from_rgb(204, 204, 204);
pub const SKELETON_HIGHLIGHT: Color32 = Color32::from_rgb(68, 68, 68);
pub const BACKDROP_FILL: Color32 = Color32::from_rgb(55, 65, 81);
/// Black dim over the backdrop, 70% opaque.
pub const BACKDROP_DIM: Color32 = Color32::from_black_alpha(178);

pub const SIDEBAR_WIDTH: f32 = 64.0;
pub const SIDEBAR_ITEM: f32 = 48.0;

pub const CARD_HEIGHT: f32 = 280.0;
pub const SELECTED_CARD_HEIGHT: f32 = 320.0;
pub const CARD_ROUNDING: f32 = 8.0;
pub const CARD_PADDING: f32 = 16.0;

pub const THUMBNAIL_WIDTH: f32 = 200.0;
pub const THUMBNAIL_HEIGHT: f32 = 150.0;
pub const HERO_MAX_WIDTH: f32 = 600.0;

pub const DOT_WIDTH: f32 = 12.0;
pub const DOT_HEIGHT: f32 = 4.0;

/// Backdrop fade-in after each selection change, in seconds.
pub const BACKDROP_FADE_SECS: f32 = 1.0;

/// Cards drawn by the loading placeholder.
pub const SKELETON_CARDS: usize = 8;

/// Smooth-scroll easing rate, fraction of remaining distance per second.
pub const SCROLL_EASING: f32 = 12.0;
