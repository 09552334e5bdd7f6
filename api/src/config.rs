use std::env;

use crate::app::{RenderOptions, DEFAULT_DOCS, DEFAULT_GENERATOR};

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// Emit the `itunes:*` channel block when `meta.itunes` is supplied
    pub include_itunes_tags: bool,
    /// Default for category elevation when `meta.elevateChannelCategories` is unset
    pub elevate_categories: bool,
    /// Fallback `<generator>` text
    pub default_generator: String,
    /// Fallback `<docs>` URL
    pub default_docs: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            include_itunes_tags: env_flag("RSS_INCLUDE_ITUNES_TAGS", true),
            elevate_categories: env_flag("RSS_ELEVATE_CATEGORIES", true),
            default_generator: env::var("RSS_DEFAULT_GENERATOR")
                .unwrap_or_else(|_| DEFAULT_GENERATOR.to_string()),
            default_docs: env::var("RSS_DEFAULT_DOCS")
                .unwrap_or_else(|_| DEFAULT_DOCS.to_string()),
        }
    }

    /// Options handed to the render service
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_itunes_tags: self.include_itunes_tags,
            elevate_categories: self.elevate_categories,
            default_generator: self.default_generator.clone(),
            default_docs: self.default_docs.clone(),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag(" YES "), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn render_options_mirror_config() {
        let config = Config {
            port: 8080,
            include_itunes_tags: false,
            elevate_categories: true,
            default_generator: "gen".to_string(),
            default_docs: "docs".to_string(),
        };

        let options = config.render_options();
        assert!(!options.include_itunes_tags);
        assert!(options.elevate_categories);
        assert_eq!(options.default_generator, "gen");
        assert_eq!(options.default_docs, "docs");
    }
}
