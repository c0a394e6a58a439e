// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod board;
pub mod clipboard;
pub mod config;
pub mod core;
pub mod error;
pub mod gui;
pub mod loader;
pub mod progress;
pub mod render;
pub mod store;

pub use error::{Error, Result};
