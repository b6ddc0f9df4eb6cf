// In-memory backend for tests: canned responses per (method, path)

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;

use super::http::{ApiRequest, ApiResponse, HttpBackend, HttpMethod};
use crate::error::ApiError;

type Reply = Result<ApiResponse, ApiError>;

#[derive(Default)]
pub struct MockBackend {
    replies: RefCell<HashMap<(HttpMethod, String), VecDeque<Reply>>>,
    calls: RefCell<Vec<ApiRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a JSON reply. The last queued reply for a route is reused once the queue drains.
    pub fn respond(&self, method: HttpMethod, path: &str, status: u16, body: serde_json::Value) -> &Self {
        self.push(method, path, Ok(ApiResponse { status, body: body.to_string() }))
    }

    pub fn fail(&self, method: HttpMethod, path: &str, error: ApiError) -> &Self {
        self.push(method, path, Err(error))
    }

    fn push(&self, method: HttpMethod, path: &str, reply: Reply) -> &Self {
        self.replies
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self, method: HttpMethod, path: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.method == method && c.path == path)
            .count()
    }
}

#[async_trait(?Send)]
impl HttpBackend for MockBackend {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.calls.borrow_mut().push(request.clone());
        let mut replies = self.replies.borrow_mut();
        let queue = replies
            .get_mut(&(request.method, request.path.clone()))
            .ok_or_else(|| ApiError::Network(format!("no mock for {:?} {}", request.method, request.path)))?;
        if queue.len() > 1 {
            queue.pop_front().unwrap_or_else(|| Err(ApiError::Network("drained".into())))
        } else {
            queue.front().cloned().unwrap_or_else(|| Err(ApiError::Network("drained".into())))
        }
    }
}
