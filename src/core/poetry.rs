use crate::domain::model::PoetryResponse;
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, WebError};

/// Fetches one line of classical poetry with its author and dynasty.
pub async fn today_poetry<F: Fetcher>(fetcher: &F, endpoint: &str) -> Result<String> {
    fetch(fetcher, endpoint)
        .await
        .map_err(WebError::in_function("today_poetry"))
}

async fn fetch<F: Fetcher>(fetcher: &F, endpoint: &str) -> Result<String> {
    let response: PoetryResponse = fetcher.get_json(endpoint).await?;

    if response.status != "success" {
        return Err(WebError::ApiStatusError {
            service: "poetry service".to_string(),
            message: format!("status was '{}'", response.status),
        });
    }

    let data = response.data.ok_or_else(|| WebError::ApiStatusError {
        service: "poetry service".to_string(),
        message: "success response carried no data".to_string(),
    })?;

    Ok(format!(
        "{}——{}（{}）",
        data.content, data.origin.author, data.origin.dynasty
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::HttpFetcher;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_today_poetry_formatting() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/one.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "status": "success",
                    "data": {
                        "content": "春眠不觉晓",
                        "origin": { "author": "孟浩然", "dynasty": "唐代" }
                    }
                }));
        });

        let fetcher = HttpFetcher::new();
        let result = today_poetry(&fetcher, &server.url("/one.json"))
            .await
            .unwrap();

        mock.assert();
        assert_eq!(result, "春眠不觉晓——孟浩然（唐代）");
    }

    #[tokio::test]
    async fn test_today_poetry_api_failure_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/one.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "status": "error", "data": null }));
        });

        let fetcher = HttpFetcher::new();
        let err = today_poetry(&fetcher, &server.url("/one.json"))
            .await
            .unwrap_err();

        let WebError::FunctionError { function, source } = err else {
            panic!("expected function error");
        };
        assert_eq!(function, "today_poetry");
        assert!(matches!(*source, WebError::ApiStatusError { .. }));
    }

    #[tokio::test]
    async fn test_today_poetry_success_without_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/one.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "status": "success" }));
        });

        let fetcher = HttpFetcher::new();
        let err = today_poetry(&fetcher, &server.url("/one.json"))
            .await
            .unwrap_err();

        assert!(matches!(err, WebError::FunctionError { .. }));
    }
}
