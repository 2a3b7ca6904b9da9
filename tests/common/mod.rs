// tests/common/mod.rs
#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Mutex, mpsc::Receiver},
};

use neis_meal::{
    core::MealSource,
    date::QueryDate,
    error::MealError,
    progress::Progress,
    render::RenderState,
};

pub const FOUND: &str = include_str!("../fixtures/found.json");
pub const NO_DATA: &str = include_str!("../fixtures/no_data.json");
pub const FALSE_FIELDS: &str = include_str!("../fixtures/false_fields.json");

/// Same answer for every date.
pub struct Fixed(pub Result<String, MealError>);

impl Fixed {
    pub fn body(body: &str) -> Self {
        Self(Ok(body.to_string()))
    }
}

impl MealSource for Fixed {
    fn fetch(&self, _api_date: &str) -> Result<String, MealError> {
        self.0.clone()
    }
}

/// Answers per API date, each held back until its gate is opened.
pub struct Gated {
    gates: Mutex<HashMap<String, (Receiver<()>, String)>>,
}

impl Gated {
    pub fn new(entries: Vec<(&str, Receiver<()>, &str)>) -> Self {
        let gates = entries
            .into_iter()
            .map(|(date, rx, body)| (date.to_string(), (rx, body.to_string())))
            .collect();
        Self { gates: Mutex::new(gates) }
    }
}

impl MealSource for Gated {
    fn fetch(&self, api_date: &str) -> Result<String, MealError> {
        let (rx, body) = self
            .gates
            .lock()
            .unwrap()
            .remove(api_date)
            .expect("unexpected date");
        rx.recv().unwrap();
        Ok(body)
    }
}

/// Records lifecycle transitions as strings.
#[derive(Default)]
pub struct Recorder {
    pub events: Vec<String>,
}

impl Progress for Recorder {
    fn begin(&mut self, date: &QueryDate) {
        self.events.push(format!("loading {date}"));
    }
    fn finish(&mut self, state: &RenderState) {
        self.events.push(format!("done {}", state.kind()));
    }
}
