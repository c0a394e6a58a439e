// src/gui/actions/edit.rs
use crate::{board::Event, core::filter::CategoryFilter, gui::app::App};

pub fn select_category(app: &mut App, key: &str) {
    let category = CategoryFilter::from_key(key);
    app.state.gui.category = category.clone();
    logd!("UI: Category button → {}", category.key());
    app.dispatch(Event::SelectCategory(category));
}

pub fn search(app: &mut App) {
    let q = app.state.gui.search.clone();
    app.dispatch(Event::Search(q));
}

pub fn add(app: &mut App) {
    let form = app.state.gui.form.clone();
    logf!("UI: Quick add submitted ({:?})", form.title);
    app.dispatch(Event::Add(form));
}

/// Answer to the "Clear local saved deals?" prompt.
pub fn clear(app: &mut App, confirmed: bool) {
    app.state.gui.confirm_clear = false;
    logf!("UI: Clear local deals confirmed={}", confirmed);
    app.dispatch(Event::ClearLocal { confirmed });
}
