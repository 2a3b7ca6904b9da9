// src/error.rs
use thiserror::Error;

use crate::config::consts::{MSG_BAD_RESPONSE, MSG_PICK_DATE};

/// Failures that end a query with a visible error.
///
/// Response-shape problems are *not* here: those degrade to "no meal"
/// (see `meal::DecodeError`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MealError {
    /// No date was given; no request is sent.
    #[error("{}", MSG_PICK_DATE)]
    EmptyDate,

    /// Connect/TLS/read failure before a usable response arrived.
    #[error("{0}")]
    Transport(String),

    /// Server answered with a non-2xx status.
    #[error("{} (HTTP {})", MSG_BAD_RESPONSE, .0)]
    Status(u16),
}

impl From<reqwest::Error> for MealError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) if !status.is_success() => MealError::Status(status.as_u16()),
            _ => MealError::Transport(e.to_string()),
        }
    }
}
