//! Recipe Finder - a desktop form for finding recipes.
//!
//! Pick ingredients, a cuisine and a healthiness range, then list the
//! built-in recipes that match.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod core;
mod ui;
mod utils;

use app::App;
use config::{Config, ConfigManager};
use crate::core::catalog::BUILTIN_CATALOG;
use eframe::NativeOptions;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins over the configured level.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let config_manager = ConfigManager::new();
    let loaded = config_manager.load();

    let log_level = loaded
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_logging(&log_level);

    let config = loaded.unwrap_or_else(|e| {
        warn!("{}; using default settings", e);
        Config::default()
    });

    info!(
        config = %config_manager.config_path().display(),
        recipes = BUILTIN_CATALOG.len(),
        ingredients = BUILTIN_CATALOG.vocabulary().len(),
        "starting recipe finder"
    );

    // Configure native window options
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title("Recipe Finder")
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Recipe Finder",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, config_manager, config)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the UI: {}", e))
}
