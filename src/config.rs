use std::env;
use std::time::Duration;

use url::Url;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: Url,
    pub api_token: Option<String>,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_token: None,
            timeout: None,
        }
    }

    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let raw_url = var("COURSES_API_URL")
            .ok_or_else(|| AppError::Config("COURSES_API_URL is not set".to_string()))?;
        let base_url = Url::parse(&raw_url)
            .map_err(|e| AppError::Config(format!("COURSES_API_URL is invalid: {}", e)))?;

        let api_token = var("COURSES_API_TOKEN").filter(|t| !t.is_empty());

        let timeout = match var("COURSES_API_TIMEOUT_SECS") {
            Some(secs) => {
                let secs = secs.trim().parse::<u64>().map_err(|_| {
                    AppError::Config(format!("COURSES_API_TIMEOUT_SECS is invalid: {}", secs))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            base_url,
            api_token,
            timeout,
        })
    }
}
