use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, WebError};
use crate::utils::validation::validate_non_empty_string;
use url::Url;

pub const DEFAULT_CITY: &str = "Shanghai";
pub const DEFAULT_PARAMS: &str = "format=3";

/// Fetches the one-line weather report for a city. The service speaks plain
/// text; the body is returned as-is.
///
/// `params` is the raw query string of the weather service (for example
/// `format=3` or `format=%l:+%c+%t`); an empty string sends none.
pub async fn weather<F: Fetcher>(
    fetcher: &F,
    endpoint: &str,
    city: &str,
    params: &str,
) -> Result<String> {
    fetch(fetcher, endpoint, city, params)
        .await
        .map_err(WebError::in_function("weather"))
}

async fn fetch<F: Fetcher>(fetcher: &F, endpoint: &str, city: &str, params: &str) -> Result<String> {
    validate_non_empty_string("city", city)?;

    // push() percent-encodes the city, so names like "New York" are safe.
    let mut url = Url::parse(endpoint)?;
    url.path_segments_mut()
        .map_err(|_| WebError::InvalidConfigValueError {
            field: "weather_endpoint".to_string(),
            value: endpoint.to_string(),
            reason: "URL cannot be a base".to_string(),
        })?
        .pop_if_empty()
        .push(city);
    if !params.is_empty() {
        url.set_query(Some(params));
    }

    fetcher.get_text(url.as_str()).await
}
