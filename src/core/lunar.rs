use crate::domain::model::LunarResponse;
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, WebError};

/// Fetches the current lunar calendar date in cyclical (ganzhi) notation.
pub async fn lunar_date<F: Fetcher>(fetcher: &F, endpoint: &str) -> Result<String> {
    fetch(fetcher, endpoint)
        .await
        .map_err(WebError::in_function("lunar_date"))
}

async fn fetch<F: Fetcher>(fetcher: &F, endpoint: &str) -> Result<String> {
    let response: LunarResponse = fetcher.get_json(endpoint).await?;

    if response.errno != 0 {
        return Err(WebError::ApiStatusError {
            service: "lunar service".to_string(),
            message: format!("errno was {}", response.errno),
        });
    }

    let lunar = response
        .data
        .ok_or_else(|| WebError::ApiStatusError {
            service: "lunar service".to_string(),
            message: "success response carried no data".to_string(),
        })?
        .lunar;

    Ok(format!(
        "{}{}年 {}月 {}日 农历{}{}",
        lunar.cyclical_year,
        lunar.zodiac,
        lunar.cyclical_month,
        lunar.cyclical_day,
        lunar.cn_month,
        lunar.cn_day
    ))
}
