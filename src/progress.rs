// src/progress.rs
use crate::{date::QueryDate, render::RenderState};

/// Lifecycle hooks for one query. Frontends implement this to surface
/// status (CLI: stderr line; tests: recorded transitions).
pub trait Progress {
    /// Loading entered; the request is about to go out.
    fn begin(&mut self, _date: &QueryDate) {}

    /// Called once with the final state, successful or not.
    fn finish(&mut self, _state: &RenderState) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
