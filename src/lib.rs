// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod date;
pub mod error;
pub mod meal;
pub mod render;

pub mod controller;
pub mod gui;
pub mod pipeline;
pub mod progress;

#[cfg(feature = "cli")]
pub mod cli;
