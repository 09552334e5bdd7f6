//! Render service
//!
//! Entry point of the renderer: turns a feed payload into an RSS response.
//! Every failure is caught once here and answered with a 500 JSON body;
//! nothing is written to the response before the document is complete.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::Level;

use crate::domain::entities::{FeedItem, Meta, RssDocument};
use crate::domain::ports::{Clock, ErrorLog, FeedResponse, LogContext};
use crate::error::{error_stack, ErrorResponse, RenderError, ResponseError};
use crate::feed::render_document;

use super::entry_normalizer::normalize_feed;
use super::envelope::wrap_envelope;
use super::image_hoister::hoist_image;
use super::metadata::feed_metadata;
use super::rss_config::{RenderOptions, RSS_CONTENT_TYPE};

/// Input of a render call, as assembled upstream
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenderPayload {
    /// Feed entries; each must be an array of tag records
    #[serde(default)]
    pub feed: Vec<Value>,
    #[serde(default)]
    pub meta: Meta,
    /// Root attribute overrides
    #[serde(default)]
    pub attr: Option<Map<String, Value>>,
}

impl RenderPayload {
    /// Decode a raw request payload.
    ///
    /// A `null` payload carries no data at all; any other shape that does not
    /// decode is malformed upstream data.
    pub fn from_value(raw: Value) -> Result<Self, RenderError> {
        if raw.is_null() {
            return Err(RenderError::EmptyPipelineResult);
        }
        serde_json::from_value(raw).map_err(|err| RenderError::UpstreamData(err.to_string()))
    }
}

/// Caller context; not used by the transformation itself
#[derive(Debug, Clone, Default)]
pub struct RequestInfo {
    pub uri: String,
}

/// Service rendering feeds to RSS
pub struct RenderService<C, L>
where
    C: Clock,
    L: ErrorLog,
{
    clock: Arc<C>,
    log: Arc<L>,
    options: RenderOptions,
}

impl<C, L> RenderService<C, L>
where
    C: Clock,
    L: ErrorLog,
{
    pub fn new(clock: Arc<C>, log: Arc<L>, options: RenderOptions) -> Self {
        Self {
            clock,
            log,
            options,
        }
    }

    /// Render the raw `payload` into `response`.
    ///
    /// Only a failure of the response itself is returned; render errors are
    /// answered through `on_error`.
    #[tracing::instrument(skip_all, fields(uri = %info.uri))]
    pub async fn render<R>(
        &self,
        payload: Value,
        info: &RequestInfo,
        response: &mut R,
    ) -> Result<(), ResponseError>
    where
        R: FeedResponse + ?Sized,
    {
        match self.render_xml(payload) {
            Ok(xml) => {
                tracing::debug!(bytes = xml.len(), "Rendered RSS feed");
                response.set_content_type(RSS_CONTENT_TYPE);
                response.send_text(xml).await
            }
            Err(err) => self.on_error(response, &err).await,
        }
    }

    /// Answer a failed render with a 500 JSON body and log it.
    pub async fn on_error<R>(
        &self,
        response: &mut R,
        error: &RenderError,
    ) -> Result<(), ResponseError>
    where
        R: FeedResponse + ?Sized,
    {
        let message = error.to_string();
        self.log.log(
            Level::ERROR,
            &message,
            &LogContext {
                stack: Some(error_stack(error)),
            },
        );

        let body = serde_json::to_value(ErrorResponse::internal(message))?;
        response.set_status(500);
        response.send_json(body).await
    }

    /// Decode, run the pipeline and serialize the result.
    pub fn render_xml(&self, payload: Value) -> Result<String, RenderError> {
        let payload = RenderPayload::from_value(payload)?;
        let document = self.build_document(payload)?;
        render_document(&document)
    }

    /// Hoist, normalize, assemble and wrap.
    pub fn build_document(&self, payload: RenderPayload) -> Result<RssDocument, RenderError> {
        let RenderPayload { feed, meta, attr } = payload;

        let feed = feed
            .into_iter()
            .map(FeedItem::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        let meta = hoist_image(&meta, &feed);
        let items = normalize_feed(feed);
        let channel = feed_metadata(&meta, items, &self.options, self.clock.now())?;

        let document = wrap_envelope(channel, attr.as_ref());
        tracing::debug!(items = document.items().count(), "Assembled RSS document");
        Ok(document)
    }
}
