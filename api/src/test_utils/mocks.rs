//! Mock implementations of port traits
//!
//! In-memory implementations that record what the renderer did so tests can
//! verify behavior.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use serde_json::Value;
use std::sync::{Arc, RwLock};
use tracing::Level;

use crate::domain::ports::{Clock, ErrorLog, FeedResponse, LogContext};
use crate::error::ResponseError;

// ============================================================================
// Fixed Clock
// ============================================================================

pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

// ============================================================================
// Recording Error Log
// ============================================================================

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub message: String,
    pub context: LogContext,
}

#[derive(Default)]
pub struct RecordingErrorLog {
    entries: Arc<RwLock<Vec<LogEntry>>>,
}

impl RecordingErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().unwrap().clone()
    }
}

impl ErrorLog for RecordingErrorLog {
    fn log(&self, level: Level, message: &str, context: &LogContext) {
        self.entries.write().unwrap().push(LogEntry {
            level,
            message: message.to_string(),
            context: context.clone(),
        });
    }
}

// ============================================================================
// Recording Response
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SentBody {
    Json(Value),
    Text(String),
}

#[derive(Debug, Default)]
pub struct RecordingResponse {
    pub status: Option<u16>,
    pub content_type: Option<String>,
    pub body: Option<SentBody>,
}

impl RecordingResponse {
    pub fn new() -> Self {
        Self::default()
    }

    fn put_body(&mut self, body: SentBody) -> Result<(), ResponseError> {
        if self.body.is_some() {
            return Err(ResponseError::AlreadySent);
        }
        self.body = Some(body);
        Ok(())
    }
}

#[async_trait]
impl FeedResponse for RecordingResponse {
    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn set_content_type(&mut self, mime: &str) {
        self.content_type = Some(mime.to_string());
    }

    async fn send_json(&mut self, body: Value) -> Result<(), ResponseError> {
        self.put_body(SentBody::Json(body))
    }

    async fn send_text(&mut self, body: String) -> Result<(), ResponseError> {
        self.put_body(SentBody::Text(body))
    }
}
