// src/config/state.rs
use std::time::Duration;

use super::{consts::*, options::QueryOptions};

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Delay before the second start-up cleanup pass
    pub cleanup_delay: Duration,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            cleanup_delay: Duration::from_millis(CLEANUP_DELAY_MS),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: QueryOptions,
    pub gui: GuiState,
}
