//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod clock;
pub mod logging;
pub mod response;

pub use clock::Clock;
pub use logging::{ErrorLog, LogContext};
pub use response::FeedResponse;
