//! HTTP response port
//!
//! The minimal response capability set the renderer writes to. The axum
//! adapter collects these calls into a `Response`; tests record them.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ResponseError;

#[async_trait]
pub trait FeedResponse: Send {
    fn set_status(&mut self, status: u16);

    fn set_content_type(&mut self, mime: &str);

    /// Write a JSON body. A response accepts exactly one body.
    async fn send_json(&mut self, body: Value) -> Result<(), ResponseError>;

    /// Write a text body. A response accepts exactly one body.
    async fn send_text(&mut self, body: String) -> Result<(), ResponseError>;
}
