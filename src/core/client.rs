use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, WebError};
use async_trait::async_trait;
use reqwest::Client;

/// The one request helper every template function goes through: issue a GET
/// and turn both transport failures and non-success statuses into a uniform
/// request error.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(WebError::StatusError {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
