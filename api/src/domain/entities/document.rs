//! RSS document tree
//!
//! Output of the envelope step: the root `<rss>` attributes plus the ordered
//! content of its single `<channel>`.

use super::tag::TagRecord;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RssDocument {
    /// Root attributes in emission order
    pub attributes: Vec<(String, String)>,
    /// Channel content: metadata records followed by `item` records
    pub channel: Vec<TagRecord>,
}

impl RssDocument {
    #[cfg(test)]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Channel records with the given name, in order.
    pub fn channel_records<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TagRecord> {
        self.channel.iter().filter(move |r| r.is(name))
    }

    pub fn items(&self) -> impl Iterator<Item = &TagRecord> {
        self.channel_records("item")
    }
}
