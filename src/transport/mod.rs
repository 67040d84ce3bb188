pub mod http;
pub mod mock;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use url::form_urlencoded;

use crate::error::AppError;

pub use http::ReqwestTransport;
pub use mock::MockTransport;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PUT, path).with_body(body)
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path plus the form-urlencoded query, pairs kept in insertion order.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.query {
            serializer.append_pair(key, value);
        }
        let query = serializer.finish();
        format!("{}?{}", self.path, query)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and hands back whatever the server answered.
///
/// Non-2xx answers are returned as `Ok`; only network-level failures are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn target_without_query_is_the_path() {
        assert_eq!(HttpRequest::get("/api/courses/12").target(), "/api/courses/12");
    }

    #[test]
    fn target_keeps_pair_order_and_empty_values() {
        let request = HttpRequest::get("/api/lessons").with_query(vec![
            ("courseId".to_string(), "12".to_string()),
            ("filter".to_string(), String::new()),
            ("sortOrder".to_string(), "asc".to_string()),
        ]);
        assert_eq!(request.target(), "/api/lessons?courseId=12&filter=&sortOrder=asc");
    }

    #[test]
    fn target_encodes_reserved_characters() {
        let request = HttpRequest::get("/api/lessons")
            .with_query(vec![("filter".to_string(), "a&b c".to_string())]);
        assert_eq!(request.target(), "/api/lessons?filter=a%26b+c");
    }

    #[test]
    fn put_carries_body() {
        let request = HttpRequest::put("/api/courses/1", json!({ "promo": true }));
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.body, Some(json!({ "promo": true })));
    }
}
