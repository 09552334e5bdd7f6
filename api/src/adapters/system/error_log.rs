//! `ErrorLog` backed by the global tracing subscriber

use tracing::Level;

use crate::domain::ports::{ErrorLog, LogContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorLog;

impl ErrorLog for TracingErrorLog {
    fn log(&self, level: Level, message: &str, context: &LogContext) {
        let stack = context.stack.as_deref().unwrap_or_default();
        match level {
            Level::ERROR => tracing::error!(stack, "{}", message),
            Level::WARN => tracing::warn!(stack, "{}", message),
            Level::INFO => tracing::info!(stack, "{}", message),
            Level::DEBUG => tracing::debug!(stack, "{}", message),
            _ => tracing::trace!(stack, "{}", message),
        }
    }
}
