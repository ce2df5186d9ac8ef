// src/progress.rs
use std::time::Duration;

use crate::engine::types::MissRecord;

/// Lightweight progress reporting used by the long-running pipelines.
/// The CLI prints; tests and library callers can pass `NullProgress`.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Periodic checkpoint: `done` items handled after `elapsed`.
    fn checkpoint(&mut self, _done: usize, _elapsed: Duration) {}

    /// A row that found no stats page, reported as it happens.
    fn missed(&mut self, _miss: &MissRecord) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Stdout reporter used by the CLI.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn checkpoint(&mut self, done: usize, elapsed: Duration) {
        println!("...{done}...");
        println!("--- {:.3} seconds ---", elapsed.as_secs_f64());
        println!();
    }

    fn missed(&mut self, miss: &MissRecord) {
        println!("{miss}");
    }
}

/// 3725s → "1h 2m 5s"
pub fn fmt_hms(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{h}h {m}m {s}s")
}
