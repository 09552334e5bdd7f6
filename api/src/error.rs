//! Unified error types for the RSS renderer
//!
//! This module defines error types for each layer:
//! - `RenderError`: failures of the feed-to-XML transformation
//! - `ResponseError`: failures writing to the HTTP response port
//! - `AppError`: HTTP-facing wrapper for a response that could not be
//!   written, surfaced as a 500 JSON body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message used whenever one of the required channel fields is absent.
pub const REQUIRED_FIELDS_MESSAGE: &str =
    "A `title`, `description` and `link` property are all required in the `meta` object for the RSS renderer";

/// Render pipeline errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{} (missing `{}`)", REQUIRED_FIELDS_MESSAGE, .0)]
    MissingRequiredField(&'static str),

    #[error("No data sent to the XML renderer, cannot respond")]
    EmptyPipelineResult,

    #[error("Malformed feed data: {0}")]
    UpstreamData(String),

    #[error("XML serialization failed: {0}")]
    Xml(String),
}

/// Errors raised by a `FeedResponse` implementation
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Response body already sent")]
    AlreadySent,

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Response(#[from] ResponseError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        // Every failure invalidates the whole document, so there is one status.
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Response failed: {}", self);

        let status = self.status();
        let body = Json(ErrorResponse {
            status: status.as_u16(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Render an error and its `source()` chain, outermost first.
pub fn error_stack(error: &(dyn std::error::Error + 'static)) -> String {
    let mut lines = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {}", cause));
        source = cause.source();
    }
    lines.join("\n")
}
