//! Domain entities
//!
//! Core data shapes of the renderer: tag records, feed items, channel
//! metadata and the finished document tree.

pub mod document;
pub mod meta;
pub mod tag;

pub use document::RssDocument;
pub use meta::{ChannelImage, ItunesCategory, ItunesMeta, ItunesOwner, Meta};
pub use tag::{is_truthy, scalar_text, FeedItem, TagRecord};
