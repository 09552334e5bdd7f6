//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod http;
pub mod system;

pub use http::AxumFeedResponse;
pub use system::{SystemClock, TracingErrorLog};
