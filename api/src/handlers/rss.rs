//! RSS handlers
//!
//! Renders a feed payload posted by the content pipeline.

use axum::{
    body::Bytes,
    extract::{OriginalUri, State},
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::adapters::AxumFeedResponse;
use crate::app::RequestInfo;
use crate::error::{AppError, RenderError};
use crate::AppState;

/// POST /rss
///
/// Body: `{feed, meta, attr}`. Responds with `text/rss+xml`, or a 500 JSON
/// error body when the feed cannot be rendered. An empty or malformed body is
/// answered by the same error responder as any render failure.
pub async fn render_rss(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    body: Bytes,
) -> Result<Response, AppError> {
    let info = RequestInfo {
        uri: uri.to_string(),
    };
    let mut response = AxumFeedResponse::new();

    match decode_body(&body) {
        Ok(payload) => {
            state
                .render_service
                .render(payload, &info, &mut response)
                .await?
        }
        Err(err) => state.render_service.on_error(&mut response, &err).await?,
    }

    Ok(response.into_response())
}

/// Raw JSON payload; an empty body is `null`.
fn decode_body(body: &[u8]) -> Result<Value, RenderError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body)
        .map_err(|err| RenderError::UpstreamData(format!("invalid JSON body: {}", err)))
}
