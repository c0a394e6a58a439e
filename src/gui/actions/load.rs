// src/gui/actions/load.rs
use std::thread;

use eframe::egui;

use crate::{gui::{app::App, progress::GuiProgress}, loader};

/// Fetch the remote feed on a worker thread; `App::update` picks the result
/// up from `app.pending` and feeds it to the board.
pub fn load(app: &mut App, ctx: Option<egui::Context>) {
    if app.running {
        logd!("Load: Clicked, but a load is already running");
        return;
    }
    app.running = true;

    let opts = app.state.options.clone();
    let pending = app.pending.clone();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());

    thread::spawn(move || {
        let deals = loader::fetch_deals(&opts, Some(&mut prog));
        if let Ok(mut p) = pending.lock() {
            *p = Some(deals);
        }
        if let Some(ctx) = ctx {
            ctx.request_repaint();
        }
    });
}
