//! Axum implementation of the `FeedResponse` port
//!
//! Calls are buffered and turned into a single `axum::response::Response`
//! once the render service is done.

use async_trait::async_trait;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::domain::ports::FeedResponse;
use crate::error::ResponseError;

#[derive(Debug)]
enum Body {
    Json(Value),
    Text(String),
}

/// Buffered response for a single render call
#[derive(Debug, Default)]
pub struct AxumFeedResponse {
    status: Option<u16>,
    content_type: Option<String>,
    body: Option<Body>,
}

impl AxumFeedResponse {
    pub fn new() -> Self {
        Self::default()
    }

    fn put_body(&mut self, body: Body) -> Result<(), ResponseError> {
        if self.body.is_some() {
            return Err(ResponseError::AlreadySent);
        }
        self.body = Some(body);
        Ok(())
    }
}

#[async_trait]
impl FeedResponse for AxumFeedResponse {
    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn set_content_type(&mut self, mime: &str) {
        self.content_type = Some(mime.to_string());
    }

    async fn send_json(&mut self, body: Value) -> Result<(), ResponseError> {
        self.put_body(Body::Json(body))
    }

    async fn send_text(&mut self, body: String) -> Result<(), ResponseError> {
        self.put_body(Body::Text(body))
    }
}

impl IntoResponse for AxumFeedResponse {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            Some(Body::Json(value)) => Json(value).into_response(),
            Some(Body::Text(text)) => text.into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        };

        if let Some(status) = self.status.and_then(|s| StatusCode::from_u16(s).ok()) {
            *response.status_mut() = status;
        }

        if let Some(mime) = self
            .content_type
            .and_then(|m| HeaderValue::from_str(&m).ok())
        {
            response.headers_mut().insert(header::CONTENT_TYPE, mime);
        }

        response
    }
}
