//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture creates valid input that can be customized.

use chrono::{DateTime, FixedOffset, TimeZone};
use serde_json::{json, Value};

use crate::app::render_service::RenderPayload;
use crate::domain::entities::Meta;

/// Monday 5 October 2026, 14:03:09 at UTC+2
pub fn fixed_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 10, 5, 14, 3, 9)
        .unwrap()
}

/// Meta with only the required fields set
pub fn test_meta() -> Meta {
    Meta {
        title: Some("Show".to_string()),
        description: Some("D".to_string()),
        link: Some("http://x".to_string()),
        ..Default::default()
    }
}

/// Payload with `test_meta()` and the given raw feed entries
pub fn test_payload(feed: Value) -> RenderPayload {
    let feed = match feed {
        Value::Array(entries) => entries,
        other => vec![other],
    };

    RenderPayload {
        feed,
        meta: test_meta(),
        attr: None,
    }
}

/// Raw request body with `test_meta()` fields and the given feed entries
pub fn test_body(feed: Value) -> Value {
    json!({
        "feed": feed,
        "meta": {"title": "Show", "description": "D", "link": "http://x"}
    })
}
