use crate::domain::model::QuoteResponse;
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, WebError};

/// Fetches a random quote and renders it as a Markdown quote callout.
pub async fn daily_quote<F: Fetcher>(fetcher: &F, endpoint: &str) -> Result<String> {
    fetch(fetcher, endpoint)
        .await
        .map_err(WebError::in_function("daily_quote"))
}

async fn fetch<F: Fetcher>(fetcher: &F, endpoint: &str) -> Result<String> {
    let quote: QuoteResponse = fetcher.get_json(endpoint).await?;
    Ok(format!("> [!quote] {}\n> — {}", quote.content, quote.author))
}
