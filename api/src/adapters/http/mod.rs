//! HTTP adapters
//!
//! Bridges the renderer's response port onto axum.

pub mod response;

pub use response::AxumFeedResponse;
