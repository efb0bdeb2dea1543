use crate::domain::model::{HitokotoOptions, HitokotoResponse};
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, WebError};
use crate::utils::validation::Validate;
use url::Url;

/// Fetches one aphorism ("hitokoto") and returns the sentence itself.
pub async fn hitokoto<F: Fetcher>(
    fetcher: &F,
    endpoint: &str,
    options: &HitokotoOptions,
) -> Result<String> {
    fetch(fetcher, endpoint, options)
        .await
        .map_err(WebError::in_function("hitokoto"))
}

async fn fetch<F: Fetcher>(fetcher: &F, endpoint: &str, options: &HitokotoOptions) -> Result<String> {
    options.validate()?;

    let mut url = Url::parse(endpoint)?;
    for (key, value) in options.query_pairs() {
        url.query_pairs_mut().append_pair(key, &value);
    }

    let response: HitokotoResponse = fetcher.get_json(url.as_str()).await?;
    Ok(response.hitokoto)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::HttpFetcher;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_hitokoto_returns_sentence() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": 42,
                    "hitokoto": "面朝大海，春暖花开。",
                    "from": "海子"
                }));
        });

        let fetcher = HttpFetcher::new();
        let result = hitokoto(&fetcher, &server.base_url(), &HitokotoOptions::default())
            .await
            .unwrap();

        mock.assert();
        assert_eq!(result, "面朝大海，春暖花开。");
    }

    #[tokio::test]
    async fn test_hitokoto_sends_selected_options() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/")
                .query_param("c", "d")
                .query_param("encode", "json")
                .query_param("min_length", "10")
                .query_param("max_length", "30");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({ "hitokoto": "ok" }));
        });

        let options = HitokotoOptions {
            category: Some("d".to_string()),
            encode: Some("json".to_string()),
            min_length: Some(10),
            max_length: Some(30),
            ..Default::default()
        };

        let fetcher = HttpFetcher::new();
        hitokoto(&fetcher, &server.base_url(), &options)
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_hitokoto_rejects_inverted_length_bounds() {
        let server = MockServer::start();
        let options = HitokotoOptions {
            min_length: Some(50),
            max_length: Some(10),
            ..Default::default()
        };

        let fetcher = HttpFetcher::new();
        let err = hitokoto(&fetcher, &server.base_url(), &options)
            .await
            .unwrap_err();

        let WebError::FunctionError { source, .. } = err else {
            panic!("expected function error");
        };
        assert!(matches!(*source, WebError::InvalidConfigValueError { .. }));
    }

    #[tokio::test]
    async fn test_hitokoto_error_wrapped() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/");
            then.status(500);
        });

        let fetcher = HttpFetcher::new();
        let err = hitokoto(&fetcher, &server.base_url(), &HitokotoOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            WebError::FunctionError {
                function: "hitokoto",
                ..
            }
        ));
    }
}
