// src/render/state.rs
use serde::Serialize;

use crate::{date::QueryDate, meal::MealDetails};

/// Exactly one of these is on screen at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RenderState {
    Loading,
    Error { message: String },
    NoData { date: QueryDate },
    MealFound { date: QueryDate, meal: MealDetails },
}

impl RenderState {
    pub fn kind(&self) -> &'static str {
        match self {
            RenderState::Loading => "loading",
            RenderState::Error { .. } => "error",
            RenderState::NoData { .. } => "no_data",
            RenderState::MealFound { .. } => "meal_found",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RenderState::Loading)
    }
}
