// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{load,copy,add,clear,...}.

mod copy;    // src/gui/actions/copy.rs
mod edit;    // src/gui/actions/edit.rs
mod load;    // src/gui/actions/load.rs

pub use copy::copy;
pub use edit::{add, clear, search, select_category};
pub use load::load;
