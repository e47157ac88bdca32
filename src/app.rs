// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait. Each frame it collects keyboard and pointer input
//! as dashboard events, draws the views from the current state and then
//! applies the collected events in order.

use crate::config::DashboardConfig;
use crate::io::media::PlaceholderPlayback;
use crate::models::project::ProjectCatalog;
use crate::models::view::{CardView, HeroView};
use crate::state::carousel::ScrollBehavior;
use crate::state::keyboard::NavKey;
use crate::state::{Dashboard, DashboardEvent};
use crate::ui::{backdrop, carousel, hero, modal, sidebar, skeleton, theme};
use crate::util::animation::SmoothScroll;
use std::sync::Arc;
use std::time::Instant;

/// Dots, spacing and the tallest card.
const CAROUSEL_HEIGHT: f32 = theme::SELECTED_CARD_HEIGHT + 40.0;

/// Main application state.
pub struct ShowreelApp {
    /// Selection, carousel, overlay and loading state
    dashboard: Dashboard,

    /// Layout and timing settings
    config: DashboardConfig,

    /// In-flight smooth scroll of the carousel
    smooth_scroll: Option<SmoothScroll>,

    /// Offset forced onto the scroll area last frame
    last_forced: Option<f32>,

    /// Events collected while drawing the current frame
    events: Vec<DashboardEvent>,
}

impl ShowreelApp {
    /// Create the application and mount the dashboard.
    pub fn new(catalog: Arc<ProjectCatalog>, config: DashboardConfig) -> Self {
        let dashboard = Dashboard::mount(
            catalog,
            &config,
            Box::new(PlaceholderPlayback::new()),
            Instant::now(),
        );
        Self {
            dashboard,
            config,
            smooth_scroll: None,
            last_forced: None,
            events: Vec::new(),
        }
    }

    /// Keyboard shortcuts: arrows move the selection, Escape closes the video.
    fn collect_key_events(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        for key in [egui::Key::ArrowLeft, egui::Key::ArrowRight] {
            if ctx.input(|i| i.key_pressed(key)) {
                self.events.push(DashboardEvent::Key(NavKey::from(key)));
            }
        }
        if self.dashboard.modal().is_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.events.push(DashboardEvent::CloseVideo);
        }
    }

    /// Offset the carousel should be forced to this frame, if any.
    fn next_scroll_offset(&mut self, ctx: &egui::Context) -> Option<f32> {
        let mut forced = None;
        if let Some(request) = self.dashboard.carousel_mut().take_scroll_request() {
            self.last_forced = None;
            match request.behavior {
                ScrollBehavior::Instant => {
                    self.smooth_scroll = None;
                    forced = Some(request.offset);
                }
                ScrollBehavior::Smooth => {
                    self.smooth_scroll = Some(SmoothScroll::new(request.offset, theme::SCROLL_EASING));
                }
            }
        }

        if let Some(smooth) = self.smooth_scroll {
            let current = self.dashboard.carousel().scroll_offset();
            // The scroll area clamped last frame's offset: the target is out of reach.
            let stalled = self
                .last_forced
                .is_some_and(|last| (last - current).abs() > 1.0);
            if stalled {
                self.smooth_scroll = None;
            } else {
                let dt = ctx.input(|i| i.stable_dt);
                let (offset, done) = smooth.step(current, dt);
                forced = Some(offset);
                if done {
                    self.smooth_scroll = None;
                } else {
                    ctx.request_repaint();
                }
            }
        }
        self.last_forced = forced;
        forced
    }

    fn show_dashboard(&mut self, ui: &mut egui::Ui, hero_view: &HeroView, now: Instant) {
        if let hero::HeroAction::OpenVideo = hero::show(ui, hero_view) {
            self.events.push(DashboardEvent::OpenVideo);
        }

        let selection = self.dashboard.selection();
        let cards: Vec<CardView> = selection
            .catalog()
            .iter()
            .enumerate()
            .map(|(position, record)| {
                CardView::new(
                    record,
                    selection.is_selected(record.id),
                    position as f32 * self.config.card_fade_step_secs,
                )
            })
            .collect();

        let elapsed = self
            .dashboard
            .loaded_at()
            .map(|loaded| now.saturating_duration_since(loaded).as_secs_f32())
            .unwrap_or(0.0);
        let scroll_to = self.next_scroll_offset(ui.ctx());
        // Page buttons and dots follow the scroll index measured last frame.
        let state = self.dashboard.carousel();

        let frame = carousel::CarouselFrame {
            cards: &cards,
            pagination: state.pagination(),
            can_page_left: state.can_page_left(),
            can_page_right: state.can_page_right(),
            is_dragging: state.is_dragging(),
            scroll_to,
            elapsed,
            fade_secs: self.config.card_fade_secs,
            card_width: self.config.card_width,
            card_spacing: self.config.card_spacing,
        };

        // Pin the carousel to the bottom of the panel.
        let spare = ui.available_height() - CAROUSEL_HEIGHT;
        if spare > 0.0 {
            ui.add_space(spare);
        }
        carousel::show(ui, &frame, &mut self.events);
    }
}

impl eframe::App for ShowreelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.dashboard.handle(DashboardEvent::Tick(now));

        // Keep frames coming until the loading gate fires.
        if let Some(remaining) = self.dashboard.loading().remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        self.collect_key_events(ctx);

        // Sidebar (left side)
        egui::SidePanel::left("sidebar")
            .exact_width(theme::SIDEBAR_WIDTH)
            .resizable(false)
            .frame(egui::Frame::none().fill(theme::SIDEBAR))
            .show(ctx, sidebar::show);

        // Hero and carousel (center)
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::BACKGROUND).inner_margin(32.0))
            .show(ctx, |ui| {
                let hero_view = HeroView::from(self.dashboard.selection().selected());
                let since_selected = now
                    .saturating_duration_since(self.dashboard.selected_at())
                    .as_secs_f32();
                backdrop::show(ui, &hero_view.backdrop, since_selected);

                if self.dashboard.is_loading() {
                    let elapsed = now
                        .saturating_duration_since(self.dashboard.mounted_at())
                        .as_secs_f32();
                    skeleton::show(ui, elapsed, self.config.card_width, self.config.card_spacing);
                } else {
                    self.show_dashboard(ui, &hero_view, now);
                }
            });

        // Video overlay
        if let Some(session) = self.dashboard.modal().session().cloned() {
            let playing = self.dashboard.player().active_source();
            if let modal::ModalAction::Close = modal::show(ctx, &session, playing) {
                self.events.push(DashboardEvent::CloseVideo);
            }
        }

        for event in std::mem::take(&mut self.events) {
            self.dashboard.handle(event);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.dashboard.unmount();
    }
}
