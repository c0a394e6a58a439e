// src/gui/components/dialogs.rs
//
// Blocking dialogs: the notice box (add result, copy fallback, errors) and
// the "clear local deals" confirmation. While either is open the rest of the
// window is disabled (see `App::blocked`).

use eframe::egui::{self, Align2, RichText};
use crate::{
    board::NoticeLevel,
    config::consts::MSG_CONFIRM_CLEAR,
    gui::{actions, app::App},
};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    notice(ctx, app);
    confirm_clear(ctx, app);
}

fn notice(ctx: &egui::Context, app: &mut App) {
    let Some(n) = app.notice.as_ref() else { return };
    let title = match n.level {
        NoticeLevel::Info => "Deal Board",
        NoticeLevel::Error => "Heads up",
    };
    let text = n.text.clone();
    let mut close = false;

    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            // selectable so a failed copy can still be copied by hand
            ui.add(egui::Label::new(text).selectable(true));
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });

    if close {
        app.notice = None;
    }
}

fn confirm_clear(ctx: &egui::Context, app: &mut App) {
    if !app.state.gui.confirm_clear || app.notice.is_some() {
        return;
    }
    let n = app.board.local().len();
    let mut answer: Option<bool> = None;

    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(MSG_CONFIRM_CLEAR);
            ui.label(RichText::new(format!("{n} local deal(s) will be removed.")).small().weak());
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() { answer = Some(true); }
                if ui.button("Cancel").clicked() { answer = Some(false); }
            });
        });

    if let Some(confirmed) = answer {
        actions::clear(app, confirmed);
    }
}
