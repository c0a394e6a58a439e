// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use deal_board::{config::{consts::CONFIG_FILE, options::AppOptions, state::AppState}, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    // Optional first argument: path to the config file
    let cfg_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    let opts = AppOptions::load(&cfg_path);
    log::init(&opts.store_dir);
    let state = AppState::new(opts);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Deal Board")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
