// src/gui/components/mod.rs
pub mod date_bar;
pub mod meal_panel;
