use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

use crate::app_config::RequestConfig;
use crate::errors::FetchError;
use crate::fetch::TextFetcher;

/// HTTP fetcher backed by a pooled reqwest client
#[derive(Debug)]
pub struct HttpFetcher {
    /// HTTP client for making requests
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher from request settings
    pub fn new(config: &RequestConfig) -> Self {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&config.user_agent) {
            headers.insert(USER_AGENT, value);
        }
        if let Ok(value) = HeaderValue::from_str(&config.accept) {
            headers.insert(ACCEPT, value);
        }

        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .default_headers(headers)
                .build()
                .unwrap_or_default(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new(&RequestConfig::default())
    }
}

#[async_trait]
impl TextFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status_code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::RequestFailed {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
