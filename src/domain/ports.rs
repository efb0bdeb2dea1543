use crate::utils::error::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// One GET request. Transport failures and non-success statuses both come
/// back as a request error; JSON decoding happens on top of `get_text`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String>;

    async fn get_json<T: DeserializeOwned + Send>(&self, url: &str) -> Result<T> {
        let body = self.get_text(url).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Base URLs of the external services. Implemented by the endpoint config
/// and by test doubles pointing at a mock server.
pub trait EndpointProvider: Send + Sync {
    fn quote_endpoint(&self) -> &str;
    fn picture_endpoint(&self) -> &str;
    fn poetry_endpoint(&self) -> &str;
    fn lunar_endpoint(&self) -> &str;
    fn weather_endpoint(&self) -> &str;
    fn hitokoto_endpoint(&self) -> &str;
}
