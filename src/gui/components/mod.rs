// src/gui/components/mod.rs

pub mod deal_grid;
pub mod dialogs;
pub mod filter_bar;
pub mod quick_add;
