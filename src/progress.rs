// src/progress.rs
/// Progress reporting for a load (fetch, decode, parse).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a load.
    fn begin(&mut self, _source: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
