use crate::domain::model::{PhotoResponse, PictureSize};
use crate::domain::ports::Fetcher;
use crate::utils::error::{Result, WebError};
use url::Url;

/// Fetches photo metadata from the proxy and renders a Markdown image with
/// an Unsplash credit line.
///
/// With `include_size` false, `size` is folded into the image URL itself
/// (`&w=`/`&h=` parameters the image CDN understands). With `include_size`
/// true the size goes into the alt text instead, as `|WxH`, and the URL is
/// left untouched.
pub async fn random_picture<F: Fetcher>(
    fetcher: &F,
    endpoint: &str,
    size: Option<PictureSize>,
    query: Option<&str>,
    include_size: bool,
) -> Result<String> {
    fetch(fetcher, endpoint, size, query, include_size)
        .await
        .map_err(WebError::in_function("random_picture"))
}

async fn fetch<F: Fetcher>(
    fetcher: &F,
    endpoint: &str,
    size: Option<PictureSize>,
    query: Option<&str>,
    include_size: bool,
) -> Result<String> {
    let mut request_url = Url::parse(endpoint)?;
    if let Some(q) = query {
        request_url.query_pairs_mut().append_pair("q", q);
    }

    let photo: PhotoResponse = fetcher.get_json(request_url.as_str()).await?;

    let mut url = photo.full;
    if let Some(size) = size {
        if !include_size {
            // The proxy hands back a CDN URL that already carries query
            // parameters, so the size is appended with '&'.
            match size {
                PictureSize::Dimensions(w, h) => url.push_str(&format!("&w={}&h={}", w, h)),
                PictureSize::Width(w) => url.push_str(&format!("&w={}", w)),
            }
        }
    }

    if include_size {
        let size_label = size.map(|s| s.to_string()).unwrap_or_default();
        Ok(format!(
            "![photo by {} on Unsplash|{}]({})",
            photo.photog, size_label, url
        ))
    } else {
        Ok(format!("![photo by {} on Unsplash]({})", photo.photog, url))
    }
}
