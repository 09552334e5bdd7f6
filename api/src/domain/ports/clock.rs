//! Wall-clock port
//!
//! `lastBuildDate` and the default copyright year read the time through this
//! trait so tests can pin it.

use chrono::{DateTime, FixedOffset};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}
