// src/progress.rs
/// Lightweight progress reporting for long-running crawl passes.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a batch with the number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a category or a bot).
    fn item_done(&mut self, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// CLI sink: one line per event on stdout.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, name: &str) {
        self.done += 1;
        println!("[{}/{}] {}", self.done, self.total, name);
    }
}
