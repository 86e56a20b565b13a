use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the checker.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Creates a logger which writes messages to stdout.
pub fn create_stdout_logger() -> InfoLogger {
    Arc::new(|msg: &str| println!("{msg}"))
}

/// Creates a logger which discards all messages.
pub fn create_noop_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}
