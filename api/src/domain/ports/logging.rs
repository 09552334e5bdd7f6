//! Logging collaborator port
//!
//! Render failures are reported through this trait rather than straight to
//! `tracing` so tests can swap the sink and assert on what was logged.

use tracing::Level;

/// Structured context attached to a log line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogContext {
    /// Error message followed by its source chain
    pub stack: Option<String>,
}

pub trait ErrorLog: Send + Sync {
    fn log(&self, level: Level, message: &str, context: &LogContext);
}
