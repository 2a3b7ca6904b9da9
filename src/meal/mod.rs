// src/meal/mod.rs
//! # Meal-information response handling
//!
//! Everything between "we have a response body" and "we know what to show".
//!
//! The remote JSON has no fixed schema. Three shapes matter:
//! - `{"RESULT": {"CODE": "INFO-200", ...}}` when nothing is published;
//! - an object without the `mealServiceDietInfo` container (other result
//!   codes, maintenance pages, ...);
//! - `{"mealServiceDietInfo": [{"head": [...]}, {"row": [ {record}, ... ]}]}`.
//!
//! ## Layers
//! - `response` decodes the body into a typed [`MealResponse`] (or a
//!   [`DecodeError`]).
//! - `record` turns one [`MealRecord`] into display-ready [`MealDetails`].
//! - `interpret` applies the precedence rules and reports *why* a date has
//!   no meal, so the caller can log it.
//!
//! Nothing here touches the network or the screen, and nothing here fails
//! outward: an unreadable body is just another reason for "no meal".

mod interpret;
mod record;
mod response;

pub use interpret::{Interpretation, NoDataReason, interpret};
pub use record::{MealDetails, MealRecord};
pub use response::{DecodeError, MealResponse, ResultHead};
