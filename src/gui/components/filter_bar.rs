// src/gui/components/filter_bar.rs
//
// Search box, category buttons (exactly one active), reload and
// "clear local" controls, plus the status line.

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.heading("Deals");
        ui.separator();

        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.search)
                .hint_text("Search title, store or details…")
                .desired_width(280.0),
        );
        if resp.changed() {
            actions::search(app);
        }

        ui.separator();

        let reload = ui.add_enabled(!app.running, egui::Button::new("⟳ Reload"));
        if reload.on_hover_text("Fetch deals.json again").clicked() {
            actions::load(app, Some(ui.ctx().clone()));
        }

        let clear = ui.add_enabled(!app.board.local().is_empty(), egui::Button::new("Clear local deals"));
        if clear.clicked() {
            app.state.gui.confirm_clear = true;
        }

        let label = if app.state.gui.show_form { "Hide quick add" } else { "Quick add" };
        if ui.button(label).clicked() {
            app.state.gui.show_form = !app.state.gui.show_form;
        }
    });

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let active = app.state.gui.category.key().to_string();
        let mut clicked: Option<String> = None;
        for key in &app.categories {
            if ui.selectable_label(*key == active, capitalize(key)).clicked() && *key != active {
                clicked = Some(key.clone());
            }
        }
        if let Some(key) = clicked {
            actions::select_category(app, &key);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(app.status_text());
            if app.running {
                ui.add(Spinner::new().size(14.0));
            }
        });
    });
    ui.add_space(4.0);
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => s!(),
    }
}
