// src/progress.rs
/// Status reporting for the feed load, the one slow operation.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called before the request goes out.
    fn begin(&mut self, _source: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end with the number of usable remote deals (0 on failure).
    fn finish(&mut self, _loaded: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
