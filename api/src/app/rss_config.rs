//! RSS rendering constants and options
//!
//! Defines the fixed defaults of the channel envelope and the flags that
//! switch optional channel blocks on or off.

/// Content type of a rendered feed
pub const RSS_CONTENT_TYPE: &str = "text/rss+xml";

/// Default `<docs>` URL
pub const DEFAULT_DOCS: &str = "http://blogs.law.harvard.edu/tech/rss";

/// Default `<generator>` text
pub const DEFAULT_GENERATOR: &str = "Feed delivered by Clay";

/// Root attributes applied before caller overrides, in emission order
pub const DEFAULT_ATTRIBUTES: &[(&str, &str)] = &[
    ("version", "2.0"),
    ("xmlns:content", "http://purl.org/rss/1.0/modules/content/"),
    ("xmlns:mi", "http://schemas.ingestion.microsoft.com/common/"),
    ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
    ("xmlns:media", "http://search.yahoo.com/mrss/"),
];

/// Prefix of iTunes podcast tags
pub const ITUNES_PREFIX: &str = "itunes:";

/// Namespace declaration added when any `itunes:` tag is emitted
pub const ITUNES_NAMESPACE: (&str, &str) =
    ("xmlns:itunes", "http://www.itunes.com/dtds/podcast-1.0.dtd");

/// `lastBuildDate` format (RFC 822)
pub const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Switches for the optional parts of the channel
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub include_itunes_tags: bool,
    /// Used when `meta.elevateChannelCategories` is not set
    pub elevate_categories: bool,
    pub default_generator: String,
    pub default_docs: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_itunes_tags: true,
            elevate_categories: true,
            default_generator: DEFAULT_GENERATOR.to_string(),
            default_docs: DEFAULT_DOCS.to_string(),
        }
    }
}
