//! Scripted CensusSource that records every upstream call.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use census_client::{CensusSource, UpstreamError};
use census_core::Table;

/// What the mock answers for one call.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Raw body, decoded exactly like a real response body.
    Body(String),
    /// Connection failure or error status with this text.
    Transport(String),
    /// 2xx with a blank body.
    Empty,
}

impl Reply {
    pub fn body(body: &str) -> Self {
        Self::Body(body.to_string())
    }

    pub fn transport(text: &str) -> Self {
        Self::Transport(text.to_string())
    }

    fn into_result(self) -> Result<Table, UpstreamError> {
        match self {
            Self::Body(body) => Ok(Table::from_json(&body)?),
            Self::Transport(text) => Err(UpstreamError::transport(text)),
            Self::Empty => Err(UpstreamError::EmptyBody),
        }
    }
}

/// Answers queued replies in order, then `fallback` forever.
pub struct MockSource {
    queued: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    delay: Option<Duration>,
    calls: AtomicU32,
    requests: Mutex<Vec<String>>,
}

impl MockSource {
    pub fn new(fallback: Reply) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback,
            delay: None,
            calls: AtomicU32::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Answers `replies` first, in order.
    pub fn with_replies(mut self, replies: Vec<Reply>) -> Self {
        self.queued = Mutex::new(replies.into());
        self
    }

    /// Sleeps before answering, to widen race windows.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    /// Calls made so far, as `variables:{year}` or `dataset:{year}:{headers}`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    async fn answer(&self, request: String) -> Result<Table, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self
            .queued
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());
        reply.into_result()
    }
}

#[async_trait]
impl CensusSource for MockSource {
    async fn variables(&self, year: u32) -> Result<Table, UpstreamError> {
        self.answer(format!("variables:{}", year)).await
    }

    async fn dataset(&self, year: u32, headers: &str) -> Result<Table, UpstreamError> {
        self.answer(format!("dataset:{}:{}", year, headers)).await
    }

    fn name(&self) -> &str {
        "mock"
    }
}
