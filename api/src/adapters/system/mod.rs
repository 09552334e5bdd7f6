//! Process-level adapters
//!
//! Wall clock and the tracing-backed error log.

pub mod clock;
pub mod error_log;

pub use clock::SystemClock;
pub use error_log::TracingErrorLog;
