// src/core/mod.rs

pub mod affiliate;
pub mod deal;
pub mod filter;
pub mod net;

pub use deal::{Deal, Origin};
