// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod fonts;

pub use app::run;
