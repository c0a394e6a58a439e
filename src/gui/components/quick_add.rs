// src/gui/components/quick_add.rs
//
// Quick-add form. Saved deals live only on this machine until they are
// copied into deals.json by hand.

use eframe::egui;
use crate::{config::consts::KNOWN_CATEGORIES, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Quick add");
    ui.label(egui::RichText::new("Saved on this device only").small().weak());
    ui.separator();

    let form = &mut app.state.gui.form;
    let mut submit = false;

    egui::Grid::new("quick_add_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            submit |= field(ui, "Title *", &mut form.title, "");
            ui.end_row();
            submit |= field(ui, "Store", &mut form.store, "Other");
            ui.end_row();

            ui.label("Category");
            let shown = if form.category.trim().is_empty() { "others" } else { form.category.as_str() };
            egui::ComboBox::from_id_salt("quick_add_category")
                .selected_text(shown.to_string())
                .show_ui(ui, |ui| {
                    for c in KNOWN_CATEGORIES {
                        ui.selectable_value(&mut form.category, c.to_string(), *c);
                    }
                });
            ui.end_row();

            submit |= field(ui, "Code", &mut form.code, "NONE");
            ui.end_row();
            submit |= field(ui, "URL *", &mut form.url, "https://…");
            ui.end_row();
            submit |= field(ui, "Image", &mut form.image, "optional image URL");
            ui.end_row();
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.button("Add deal").clicked() {
            submit = true;
        }
        if ui.button("Reset").clicked() {
            app.state.gui.form.reset();
        }
    });

    if submit {
        actions::add(app);
    }
}

/// One labelled single-line input; true when Enter was pressed in it.
fn field(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> bool {
    ui.label(label);
    let resp = ui.add(egui::TextEdit::singleline(value).hint_text(hint).desired_width(170.0));
    resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
