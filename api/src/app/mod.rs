//! Application layer
//!
//! The render pipeline: each step is a plain function over domain types,
//! and `RenderService` runs them in order.

pub mod entry_normalizer;
pub mod envelope;
pub mod image_hoister;
pub mod metadata;
pub mod render_service;
pub mod rss_config;

pub use render_service::{RenderService, RequestInfo};
pub use rss_config::{RenderOptions, DEFAULT_DOCS, DEFAULT_GENERATOR};
