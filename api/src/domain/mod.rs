//! Domain layer
//!
//! Feed shapes and the collaborator interfaces the renderer depends on.
//! - `entities`: tag records, feed items, channel metadata, document tree
//! - `ports`: response, logging and clock traits

pub mod entities;
pub mod ports;
