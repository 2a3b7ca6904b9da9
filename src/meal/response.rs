// src/meal/response.rs
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::record::MealRecord;
use crate::config::consts::{CONTAINER_KEY, NO_DATA_CODE};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected shape: {0}")]
    Shape(&'static str),
}

/// `RESULT` block: `{"CODE": "INFO-200", "MESSAGE": "해당하는 데이터가 없습니다."}`
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ResultHead {
    #[serde(rename = "CODE", default)]
    pub code: String,
    #[serde(rename = "MESSAGE", default)]
    pub message: String,
}

/// The three response shapes we distinguish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MealResponse {
    /// Top-level result code says nothing is published for the date.
    NoDataCode(ResultHead),
    /// No meal container at all.
    MissingContainer,
    /// Container present; holds the first row record, if there is one.
    Found(Option<MealRecord>),
}

impl MealResponse {
    pub fn parse(body: &str) -> Result<Self, DecodeError> {
        let root: Value = serde_json::from_str(body)?;
        let obj = root
            .as_object()
            .ok_or(DecodeError::Shape("top level is not an object"))?;

        // The no-data code wins over anything else in the body.
        // Anything but a string `CODE` is ignored here, not an error.
        if let Some(head) = obj.get("RESULT") {
            if head.get("CODE").and_then(Value::as_str) == Some(NO_DATA_CODE) {
                return Ok(MealResponse::NoDataCode(ResultHead {
                    code: s!(NO_DATA_CODE),
                    message: head
                        .get("MESSAGE")
                        .and_then(Value::as_str)
                        .map(String::from)
                        .unwrap_or_default(),
                }));
            }
        }

        let container = match obj.get(CONTAINER_KEY) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                return Ok(MealResponse::MissingContainer);
            }
            Some(v) => v,
        };

        let blocks = container
            .as_array()
            .ok_or(DecodeError::Shape("meal container is not an array"))?;
        let block = blocks
            .get(1)
            .ok_or(DecodeError::Shape("meal container has no row block"))?;

        // Only the first record is ever shown; later rows are not decoded.
        let first = match block.get("row") {
            None | Some(Value::Null) => None,
            Some(Value::Array(rows)) => rows.first(),
            Some(_) => return Err(DecodeError::Shape("row is not an array")),
        };
        let record = first.map(MealRecord::deserialize).transpose()?;
        Ok(MealResponse::Found(record))
    }

    /// First record of the first row block, if any.
    pub fn first_record(&self) -> Option<&MealRecord> {
        match self {
            MealResponse::Found(record) => record.as_ref(),
            _ => None,
        }
    }
}
