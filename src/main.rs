// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Showreel - Project Showcase Dashboard
//!
//! A desktop dashboard presenting a hero panel for the selected project and
//! a scrollable carousel of project cards, with a video overlay.

mod app;
mod config;
mod io;
mod models;
mod state;
mod ui;
mod util;

use anyhow::{Context, Result};
use app::ShowreelApp;
use config::DashboardConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = DashboardConfig::load()?;

    let catalog = match config.catalog.as_deref() {
        Some(path) => std::sync::Arc::new(
            io::serialization::import_catalog(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        ),
        None => models::builtin::builtin()?,
    };
    log::info!("Showing {} projects", catalog.len());

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 600.0])
            .with_title("Showreel - Project Dashboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Showreel",
        options,
        Box::new(move |_cc| Ok(Box::new(ShowreelApp::new(catalog, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
