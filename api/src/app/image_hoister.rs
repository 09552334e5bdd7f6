//! Image hoister
//!
//! RSS has a single channel image. It is taken from the `image` record of the
//! first feed entry only; images on later entries never reach the channel.
//! The caller's `Meta` is never modified: a derived copy carries the image.

use crate::domain::entities::{ChannelImage, FeedItem, Meta};

/// Channel image from the leading entry, when its `url` is non-empty.
pub fn leading_image(feed: &[FeedItem]) -> Option<ChannelImage> {
    let url = feed
        .first()?
        .find("image")?
        .value()
        .get("url")?
        .as_str()
        .filter(|url| !url.is_empty())?;

    Some(ChannelImage {
        url: Some(url.to_string()),
    })
}

/// Meta as seen by the metadata assembler.
pub fn hoist_image(meta: &Meta, feed: &[FeedItem]) -> Meta {
    match leading_image(feed) {
        Some(image) => meta.with_image(image),
        None => meta.clone(),
    }
}
