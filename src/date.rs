// src/date.rs
//! Query dates.
//!
//! The user's text (`YYYY-MM-DD`) is the single source of truth: the API
//! form and the display form are both derived from it, never from anything
//! the server sends back.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use crate::{config::consts::WEEKDAY_LABELS, error::MealError};

const INPUT_FMT: &str = "%Y-%m-%d";

/// Today in the local time zone, as `YYYY-MM-DD`.
pub fn default_date() -> String {
    Local::now().date_naive().format(INPUT_FMT).to_string()
}

/// `YYYY-MM-DD` → `YYYYMMDD`. Pure string transform; no calendar check.
pub fn to_api_date(input: &str) -> String {
    input.chars().filter(|c| *c != '-').collect()
}

/// `YYYY-MM-DD` → `YYYY년 M월 D일 (요일)`, or `None` if the text is not a
/// real calendar date.
pub fn to_display_date(input: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(input, INPUT_FMT).ok()?;
    let weekday = WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize];
    Some(format!(
        "{}년 {}월 {}일 ({})",
        date.year(),
        date.month(),
        date.day(),
        weekday
    ))
}

/// Parse the input text into a calendar date (used by the GUI date picker).
pub fn parse_input(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), INPUT_FMT).ok()
}

pub fn format_input(date: NaiveDate) -> String {
    date.format(INPUT_FMT).to_string()
}

/// The date a single query is about, exactly as selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryDate(String);

impl QueryDate {
    /// Validate the raw field text. Only emptiness is rejected here; a
    /// malformed date still produces a request (and, later, "no meal").
    pub fn resolve(input: &str) -> Result<Self, MealError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MealError::EmptyDate);
        }
        Ok(Self(s!(trimmed)))
    }

    pub fn today() -> Self {
        Self(default_date())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn api(&self) -> String {
        to_api_date(&self.0)
    }

    /// Display form; falls back to the raw text when it is not a real date.
    pub fn display(&self) -> String {
        to_display_date(&self.0).unwrap_or_else(|| self.0.clone())
    }
}

impl std::fmt::Display for QueryDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
