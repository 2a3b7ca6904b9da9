// src/controller.rs
//! Query coordination for the GUI.
//!
//! Each submission gets a ticket. Requests run on worker threads and report
//! back over a channel; only the answer for the newest ticket is applied.
//! Older answers that arrive late are dropped instead of overwriting what
//! the user asked for last.

use std::{
    io,
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        mpsc::{self, Receiver, Sender},
    },
    thread,
};

use crate::{
    core::MealSource,
    error::MealError,
    pipeline,
    render::RenderState,
};

type Ticket = u64;
type Done = (Ticket, RenderState);

pub struct MealInfoController {
    source: Arc<dyn MealSource>,
    tx: Sender<Done>,
    rx: Receiver<Done>,
    latest: Ticket,
    in_flight: usize,
    state: RenderState,
}

impl MealInfoController {
    /// Starts in Loading: the first query is expected right away.
    pub fn new(source: Arc<dyn MealSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            source,
            tx,
            rx,
            latest: 0,
            in_flight: 0,
            state: RenderState::Loading,
        }
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Start a query for the field text. Returns the state to show now:
    /// Loading, or Error if the date was rejected. `notify` runs on the
    /// worker once its answer is queued (GUI: request a repaint).
    pub fn submit<F>(&mut self, input: &str, notify: F) -> &RenderState
    where
        F: FnOnce() + Send + 'static,
    {
        // Even a rejected input supersedes whatever is still pending.
        self.latest += 1;
        let ticket = self.latest;

        let date = match pipeline::resolve(input) {
            Ok(date) => date,
            Err(e) => {
                self.state = pipeline::error_state(&e);
                return &self.state;
            }
        };

        logf!("Query: Begin ticket={} date={}", ticket, date);

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let spawned = thread::Builder::new()
            .name(format!("meal-query-{ticket}"))
            .spawn(move || {
                // Every started worker must answer, or wait_idle never returns.
                let state = panic::catch_unwind(AssertUnwindSafe(|| pipeline::retrieve(&date, source.as_ref())))
                    .unwrap_or_else(|_| {
                        loge!("Query: Worker panicked ticket={}", ticket);
                        pipeline::error_state(&MealError::Transport(s!("query worker panicked")))
                    });
                let _ = tx.send((ticket, state));
                notify();
            });

        self.state = match spawned {
            Ok(_) => {
                self.in_flight += 1;
                RenderState::Loading
            }
            Err(e) => start_failed(&e),
        };
        &self.state
    }

    /// Apply finished queries without blocking. True if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(done) = self.rx.try_recv() {
            changed |= self.accept(done);
        }
        changed
    }

    /// Block until every started query has answered. Workers answer even
    /// when the source panics.
    pub fn wait_idle(&mut self) -> &RenderState {
        while self.in_flight > 0 {
            match self.rx.recv() {
                Ok(done) => {
                    self.accept(done);
                }
                Err(_) => break,
            }
        }
        &self.state
    }

    fn accept(&mut self, (ticket, state): Done) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);
        if ticket != self.latest {
            logd!("Query: Dropped stale answer ticket={} (latest={})", ticket, self.latest);
            return false;
        }
        self.state = state;
        true
    }
}

fn start_failed(e: &io::Error) -> RenderState {
    loge!("Query: Could not start worker: {}", e);
    pipeline::error_state(&MealError::Transport(e.to_string()))
}
