//! Envelope wrapper
//!
//! Nests channel content inside `<rss><channel>` and resolves the root
//! attributes.

use serde_json::{Map, Value};

use crate::domain::entities::{is_truthy, scalar_text, RssDocument, TagRecord};

use super::rss_config::{DEFAULT_ATTRIBUTES, ITUNES_NAMESPACE, ITUNES_PREFIX};

/// Merge caller attributes over the defaults and drop falsy values.
///
/// Caller values win per key. Defaults keep their position; new keys follow
/// in caller order.
pub fn merge_attributes(
    overrides: Option<&Map<String, Value>>,
    include_itunes: bool,
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, Value)> = DEFAULT_ATTRIBUTES
        .iter()
        .chain(include_itunes.then_some(&ITUNES_NAMESPACE))
        .map(|(name, value)| (name.to_string(), Value::from(*value)))
        .collect();

    for (name, value) in overrides.into_iter().flatten() {
        match merged.iter_mut().find(|(existing, _)| existing == name) {
            Some(slot) => slot.1 = value.clone(),
            None => merged.push((name.clone(), value.clone())),
        }
    }

    merged
        .into_iter()
        .filter(|(_, value)| is_truthy(value))
        .map(|(name, value)| {
            let text = scalar_text(&value).unwrap_or_else(|| value.to_string());
            (name, text)
        })
        .collect()
}

/// Wrap channel content into the document root.
pub fn wrap_envelope(
    channel: Vec<TagRecord>,
    overrides: Option<&Map<String, Value>>,
) -> RssDocument {
    let include_itunes = channel.iter().any(|r| r.uses_prefix(ITUNES_PREFIX));

    RssDocument {
        attributes: merge_attributes(overrides, include_itunes),
        channel,
    }
}
