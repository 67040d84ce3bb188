use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::{HttpRequest, HttpResponse, HttpTransport};
use crate::config::ClientConfig;
use crate::error::AppError;

pub struct ReqwestTransport {
    client: Client,
    base_url: Url,
    api_token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(config: ClientConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build http client: {}", e)))?;

        // Request paths are joined relative to the base, so it must end in '/'.
        let mut base_url = config.base_url;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token,
        })
    }

    fn resolve(&self, request: &HttpRequest) -> Result<Url, AppError> {
        let target = request.target();
        self.base_url
            .join(target.trim_start_matches('/'))
            .map_err(|e| {
                warn!("Invalid request target {}: {}", target, e);
                AppError::Config(format!("Invalid request target {}: {}", target, e))
            })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, AppError> {
        let url = self.resolve(&request)?;
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), url);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed: {}", request.method, request.target(), e);
            AppError::Network(e)
        })?;

        let status = response.status();
        let status_text = reason_phrase(&response);
        let body = response.text().await.map_err(|e| {
            warn!("{} {} body read failed: {}", request.method, request.target(), e);
            AppError::Network(e)
        })?;

        Ok(HttpResponse {
            status: status.as_u16(),
            status_text,
            body,
        })
    }
}

/// The reason phrase the server sent. hyper only keeps it when it differs from the
/// canonical one, so the canonical phrase fills in otherwise.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}
