//! Metadata assembler
//!
//! Builds the ordered content of `<channel>`: required site fields, build
//! date, defaults, the optional iTunes block, caller extras, the channel
//! image, the elevated category summary and finally the items.

use chrono::{DateTime, Datelike, FixedOffset};
use serde_json::{json, Value};

use crate::domain::entities::{is_truthy, scalar_text, ItunesMeta, Meta, TagRecord};
use crate::error::RenderError;

use super::rss_config::{RenderOptions, RFC822_FORMAT};

/// Assemble channel records for `meta` followed by the wrapped `items`.
///
/// Fails before producing anything when `title`, `description` or `link`
/// is missing or empty.
pub fn feed_metadata(
    meta: &Meta,
    items: Vec<TagRecord>,
    options: &RenderOptions,
    now: DateTime<FixedOffset>,
) -> Result<Vec<TagRecord>, RenderError> {
    let title = required(&meta.title, "title")?;
    let description = required(&meta.description, "description")?;
    let link = required(&meta.link, "link")?;

    let mut channel = vec![
        TagRecord::new("title", title),
        TagRecord::new("description", description),
        TagRecord::new("link", link),
        TagRecord::new("lastBuildDate", now.format(RFC822_FORMAT).to_string()),
        TagRecord::new("docs", or_default(&meta.docs, &options.default_docs)),
        TagRecord::new("copyright", copyright(meta, now)),
        TagRecord::new(
            "generator",
            or_default(&meta.generator, &options.default_generator),
        ),
    ];

    if options.include_itunes_tags {
        if let Some(itunes) = &meta.itunes {
            channel.extend(itunes_records(itunes, meta.image_url()));
        }
    }

    channel.extend(meta.opt.iter().cloned());

    if let Some(url) = meta.image_url() {
        channel.push(TagRecord::with_children(
            "image",
            vec![
                TagRecord::new("url", url),
                TagRecord::new("link", link),
                TagRecord::new("title", title),
            ],
        ));
    }

    let elevate = meta
        .elevate_channel_categories
        .unwrap_or(options.elevate_categories);
    if elevate {
        channel.extend(elevate_categories(&items));
    }

    channel.extend(items);
    Ok(channel)
}

/// Comma-joined `category` values of every item, in item order.
///
/// Items without a category are skipped; `None` when no item has one.
pub fn elevate_categories(items: &[TagRecord]) -> Option<TagRecord> {
    let categories: Vec<String> = items
        .iter()
        .flat_map(|item| item.children())
        .filter(|(name, _)| *name == "category")
        .filter_map(|(_, value)| scalar_text(value))
        .filter(|text| !text.is_empty())
        .collect();

    if categories.is_empty() {
        None
    } else {
        Some(TagRecord::new("category", categories.join(",")))
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, RenderError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(RenderError::MissingRequiredField(field))
}

fn or_default(value: &Option<String>, default: &str) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn copyright(meta: &Meta, now: DateTime<FixedOffset>) -> Value {
    match &meta.copyright {
        Some(Value::String(text)) if text.trim().is_empty() => Value::from(now.year()),
        Some(value) if is_truthy(value) => value.clone(),
        _ => Value::from(now.year()),
    }
}

fn itunes_records(itunes: &ItunesMeta, fallback_image: Option<&str>) -> Vec<TagRecord> {
    let mut records = Vec::new();

    let text_fields = [
        ("itunes:author", &itunes.author),
        ("itunes:subtitle", &itunes.subtitle),
        ("itunes:summary", &itunes.summary),
        ("itunes:type", &itunes.show_type),
    ];
    for (name, value) in text_fields {
        if let Some(text) = non_empty(value) {
            records.push(TagRecord::new(name, text));
        }
    }

    if let Some(explicit) = itunes.explicit {
        records.push(TagRecord::new("itunes:explicit", explicit.to_string()));
    }

    if let Some(owner) = &itunes.owner {
        let mut fields = Vec::new();
        if let Some(name) = non_empty(&owner.name) {
            fields.push(TagRecord::new("itunes:name", name));
        }
        if let Some(email) = non_empty(&owner.email) {
            fields.push(TagRecord::new("itunes:email", email));
        }
        if !fields.is_empty() {
            records.push(TagRecord::with_children("itunes:owner", fields));
        }
    }

    if let Some(href) = non_empty(&itunes.image).or(fallback_image) {
        records.push(TagRecord::new(
            "itunes:image",
            json!({ "_attr": { "href": href } }),
        ));
    }

    for category in itunes.categories.iter().filter(|c| !c.text.is_empty()) {
        let value = match non_empty(&category.subcategory) {
            Some(sub) => json!([
                { "_attr": { "text": category.text } },
                { "itunes:category": { "_attr": { "text": sub } } }
            ]),
            None => json!({ "_attr": { "text": category.text } }),
        };
        records.push(TagRecord::new("itunes:category", value));
    }

    records
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
