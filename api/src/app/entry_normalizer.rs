//! Entry normalizer
//!
//! Turns each feed entry into an `<item>` record. An `image` record is not an
//! item field: it is stripped here, and only the first entry's image is ever
//! used for the channel (see `image_hoister`).

use crate::domain::entities::{FeedItem, TagRecord};

/// A wrapped `item` record and the image record removed from it, if any
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedItem {
    pub item: TagRecord,
    pub image: Option<TagRecord>,
}

/// Remove the first `image` record and wrap the rest as `{item: [...]}`.
pub fn normalize_item(entry: FeedItem) -> NormalizedItem {
    let mut records = entry.0;
    let image = records
        .iter()
        .position(|r| r.is("image"))
        .map(|index| records.remove(index));

    NormalizedItem {
        item: TagRecord::with_children("item", records),
        image,
    }
}

/// Normalize every entry, keeping feed order.
///
/// Images stripped from entries after the first are dropped.
pub fn normalize_feed(feed: Vec<FeedItem>) -> Vec<TagRecord> {
    feed.into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let normalized = normalize_item(entry);
            if index > 0 && normalized.image.is_some() {
                tracing::debug!(index, "Discarding image record from non-leading feed item");
            }
            normalized.item
        })
        .collect()
}
