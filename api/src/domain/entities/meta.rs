//! Channel metadata
//!
//! Site-level description of the feed, as produced by the upstream
//! content-assembly step. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tag::TagRecord;

/// Channel-level descriptive metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// Required
    pub title: Option<String>,
    /// Required
    pub description: Option<String>,
    /// Required
    pub link: Option<String>,
    /// String or number; defaults to the current year
    pub copyright: Option<Value>,
    pub generator: Option<String>,
    pub docs: Option<String>,
    /// Extra channel records appended verbatim
    #[serde(default)]
    pub opt: Vec<TagRecord>,
    /// Channel image, usually hoisted from the first feed item
    pub image: Option<ChannelImage>,
    /// Overrides the configured category-elevation default
    pub elevate_channel_categories: Option<bool>,
    /// Podcast metadata for the `itunes:` namespace
    pub itunes: Option<ItunesMeta>,
}

impl Meta {
    /// Derived copy carrying the given channel image.
    pub fn with_image(&self, image: ChannelImage) -> Self {
        Self {
            image: Some(image),
            ..self.clone()
        }
    }

    /// Hoisted image url, if any and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        self.image
            .as_ref()
            .and_then(|i| i.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelImage {
    pub url: Option<String>,
}

/// iTunes podcast channel metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItunesMeta {
    pub author: Option<String>,
    pub subtitle: Option<String>,
    pub summary: Option<String>,
    /// "episodic" or "serial"
    #[serde(rename = "type")]
    pub show_type: Option<String>,
    pub explicit: Option<bool>,
    pub owner: Option<ItunesOwner>,
    /// Artwork url; falls back to the channel image
    pub image: Option<String>,
    #[serde(default)]
    pub categories: Vec<ItunesCategory>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItunesOwner {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItunesCategory {
    pub text: String,
    pub subcategory: Option<String>,
}
