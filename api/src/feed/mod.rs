//! Feed module
//!
//! XML serialization of rendered RSS documents.

pub mod renderer;

pub use renderer::render_document;
