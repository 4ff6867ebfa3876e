//! Scripted gateway for driving the feed without a network

use super::CardGateway;
use crate::error::FetchError;
use crate::model::PageResponse;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Gateway that replays queued results in order and records every request.
///
/// Once the script runs dry, every further call fails.
#[derive(Debug, Default)]
pub struct ScriptedGateway {
    script: Mutex<VecDeque<Result<PageResponse, FetchError>>>,
    requests: Mutex<Vec<u32>>,
}

impl ScriptedGateway {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful page
    #[must_use]
    pub fn then_page(self, page: PageResponse) -> Self {
        self.push(Ok(page));
        self
    }

    /// Queue a failure with the given description
    #[must_use]
    pub fn then_error(self, message: impl Into<String>) -> Self {
        self.push(Err(FetchError::new(message)));
        self
    }

    /// Queue a result
    pub fn push(&self, result: Result<PageResponse, FetchError>) {
        lock(&self.script).push_back(result);
    }

    /// Page numbers requested so far, in call order
    pub fn requests(&self) -> Vec<u32> {
        lock(&self.requests).clone()
    }

    /// Number of queued results not yet consumed
    pub fn remaining(&self) -> usize {
        lock(&self.script).len()
    }
}

#[async_trait]
impl CardGateway for ScriptedGateway {
    async fn fetch_page(&self, page_no: u32) -> Result<PageResponse, FetchError> {
        lock(&self.requests).push(page_no);
        lock(&self.script)
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::new(format!("no scripted response for page {page_no}"))))
    }
}

// A poisoned lock only means another test thread panicked mid-push
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
