// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Dashboard state.
//!
//! [`Dashboard`] owns the selection, carousel, overlay and loading gate and
//! applies [`DashboardEvent`]s to them one at a time. The UI layer only
//! produces events and reads state back; it never mutates state directly.

pub mod carousel;
pub mod keyboard;
pub mod lifecycle;
pub mod loading;
pub mod modal;
pub mod selection;

use crate::config::DashboardConfig;
use crate::io::media::MediaPlayback;
use crate::models::project::ProjectCatalog;
use carousel::{CarouselController, CarouselLayout};
use keyboard::{NavKey, NavOutcome};
use lifecycle::{ListenerKind, Subscription, Subscriptions};
use loading::LoadingGate;
use modal::ModalController;
use selection::SelectionModel;
use std::sync::Arc;
use std::time::Instant;

/// Discrete input the dashboard reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardEvent {
    /// Carousel viewport measured at `left` with `width`
    Resized { width: f32, left: f32 },
    Scrolled(f32),
    DragStart(f32),
    DragMove(f32),
    DragEnd,
    /// Pointer left the carousel during a drag
    DragCancel,
    PageLeft,
    PageRight,
    SelectCard(u32),
    Key(NavKey),
    OpenVideo,
    CloseVideo,
    Tick(Instant),
}

pub struct Dashboard {
    selection: SelectionModel,
    carousel: CarouselController,
    modal: ModalController,
    loading: LoadingGate,
    player: Box<dyn MediaPlayback>,
    subscriptions: Subscriptions,
    listeners: Vec<Subscription>,
    mounted_at: Instant,
    loaded_at: Option<Instant>,
    /// Time of the most recent tick
    now: Instant,
    /// When the current selection was made
    selected_at: Instant,
}

impl Dashboard {
    /// Mount the dashboard at `now`: arm the loading gate and attach the
    /// resize and scroll listeners.
    pub fn mount(
        catalog: Arc<ProjectCatalog>,
        config: &DashboardConfig,
        player: Box<dyn MediaPlayback>,
        now: Instant,
    ) -> Self {
        let card_count = catalog.len();
        let subscriptions = Subscriptions::new();
        let listeners = vec![
            subscriptions.attach(ListenerKind::Resize),
            subscriptions.attach(ListenerKind::Scroll),
        ];
        log::info!("Mounted dashboard with {} projects", card_count);

        Self {
            selection: SelectionModel::new(catalog),
            carousel: CarouselController::new(CarouselLayout::from(config), card_count),
            modal: ModalController::new(),
            loading: LoadingGate::start(now, config.loading_delay()),
            player,
            subscriptions,
            listeners,
            mounted_at: now,
            loaded_at: None,
            now,
            selected_at: now,
        }
    }

    /// Tear down: cancel the loading gate, stop playback and detach listeners.
    pub fn unmount(&mut self) {
        self.loading.cancel();
        self.modal.close(self.player.as_mut());
        self.listeners.clear();
        log::info!("Unmounted dashboard");
    }

    #[cfg(test)]
    pub fn is_mounted(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub fn handle(&mut self, event: DashboardEvent) {
        let previous = self.selection.selected().id;
        self.apply(event);
        if self.selection.selected().id != previous {
            self.selected_at = self.now;
        }
    }

    fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Resized { width, left } => {
                if self.subscriptions.is_attached(ListenerKind::Resize) {
                    self.carousel.set_viewport_left(left);
                    if width != self.carousel.viewport_width() {
                        self.carousel.on_viewport_resize(width);
                    }
                }
            }
            DashboardEvent::Scrolled(offset) => {
                if self.subscriptions.is_attached(ListenerKind::Scroll) {
                    self.carousel.on_scroll_position_changed(offset);
                }
            }
            DashboardEvent::DragStart(x) => self.carousel.on_drag_start(x),
            DashboardEvent::DragMove(x) => {
                self.carousel.on_drag_move(x);
            }
            DashboardEvent::DragEnd => self.carousel.on_drag_end(),
            DashboardEvent::DragCancel => self.carousel.on_drag_cancel(),
            DashboardEvent::PageLeft => {
                self.carousel.page_left();
            }
            DashboardEvent::PageRight => {
                self.carousel.page_right();
            }
            DashboardEvent::SelectCard(id) => {
                self.selection.select(id);
            }
            DashboardEvent::Key(key) => {
                if let NavOutcome::Moved { id } =
                    keyboard::navigate(key, &mut self.selection, &mut self.carousel)
                {
                    log::debug!("Keyboard moved selection to {}", id);
                }
            }
            DashboardEvent::OpenVideo => {
                self.modal.open(self.selection.selected(), self.player.as_mut());
            }
            DashboardEvent::CloseVideo => self.modal.close(self.player.as_mut()),
            DashboardEvent::Tick(now) => {
                self.now = now;
                if self.loading.poll(now) {
                    self.loaded_at = Some(now);
                }
            }
        }
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut CarouselController {
        &mut self.carousel
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn loading(&self) -> &LoadingGate {
        &self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn player(&self) -> &dyn MediaPlayback {
        self.player.as_ref()
    }

    #[cfg(test)]
    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    pub fn mounted_at(&self) -> Instant {
        self.mounted_at
    }

    /// When the current project was selected; the backdrop fades in from here.
    pub fn selected_at(&self) -> Instant {
        self.selected_at
    }

    /// When the loading gate fired; card fade-ins are timed from here.
    pub fn loaded_at(&self) -> Option<Instant> {
        self.loaded_at
    }
}
