use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde::Serialize;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::error::AppError;

enum Scripted {
    Reply(Result<HttpResponse, AppError>),
    Hang,
}

/// Scripted in-memory transport. Replies are handed out in the order they were queued
/// and every request is recorded for later inspection.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_json<T: Serialize>(&self, status: u16, body: &T) -> &Self {
        let body = serde_json::to_string(body).expect("scripted body serializes");
        self.push(Scripted::Reply(Ok(HttpResponse {
            status,
            status_text: reason(status).to_string(),
            body,
        })))
    }

    pub fn respond_text(&self, status: u16, status_text: &str, body: &str) -> &Self {
        self.push(Scripted::Reply(Ok(HttpResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        })))
    }

    pub fn fail_with(&self, error: AppError) -> &Self {
        self.push(Scripted::Reply(Err(error)))
    }

    /// The next request never gets an answer.
    pub fn hang(&self) -> &Self {
        self.push(Scripted::Hang)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        lock(&self.requests).clone()
    }

    /// Returns the only recorded request for `target`, panicking on zero or several.
    pub fn expect_one(&self, target: &str) -> HttpRequest {
        let mut matching: Vec<HttpRequest> = lock(&self.requests)
            .iter()
            .filter(|r| r.target() == target)
            .cloned()
            .collect();
        if matching.len() != 1 {
            panic!(
                "expected one request for {}, found {} (recorded: {:?})",
                target,
                matching.len(),
                self.targets()
            );
        }
        matching.remove(0)
    }

    /// Panics if queued replies were never consumed.
    pub fn verify(&self) {
        let left = lock(&self.replies).len();
        if left > 0 {
            panic!(
                "{} scripted replies were never requested (recorded: {:?})",
                left,
                self.targets()
            );
        }
    }

    fn targets(&self) -> Vec<String> {
        lock(&self.requests).iter().map(HttpRequest::target).collect()
    }

    fn push(&self, scripted: Scripted) -> &Self {
        lock(&self.replies).push_back(scripted);
        self
    }
}

fn reason(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        let target = request.target();
        lock(&self.requests).push(request);

        let next = lock(&self.replies).pop_front();
        match next {
            Some(Scripted::Reply(reply)) => reply,
            Some(Scripted::Hang) => std::future::pending().await,
            None => panic!("no scripted reply for {}", target),
        }
    }
}
