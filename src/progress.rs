// src/progress.rs
/// Lightweight progress reporting for the startup fetch.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once before the source is touched.
    fn begin(&mut self, _what: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end with the number of records kept.
    fn finish(&mut self, _count: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Plain console lines; the only diagnostics channel the binaries have.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, what: &str) {
        println!("Fetching {what}...");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn finish(&mut self, count: usize) {
        println!("Loaded {count} records.");
    }
}
