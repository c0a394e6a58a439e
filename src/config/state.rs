// src/config/state.rs
use super::options::AppOptions;
use crate::board::form::QuickAddForm;
use crate::core::filter::CategoryFilter;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Exactly one category button is active at a time
    pub category: CategoryFilter,

    /// Raw search box text (trimmed/lower-cased only when filtering)
    pub search: String,

    /// Quick-add form fields, cleared after a successful submit
    pub form: QuickAddForm,
    pub show_form: bool,

    /// "Clear local deals?" dialog is open
    pub confirm_clear: bool,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search: s!(),
            form: QuickAddForm::default(),
            show_form: true,
            confirm_clear: false,
            window_w: 1100,
            window_h: 760,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
