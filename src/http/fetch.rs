use reqwest::{Client, Response};

use crate::constants::MAX_BODY_BYTES;
use crate::error::{FetchError, GhtError};
use crate::utils::{extract_title, normalize_url_scheme};

/// A fetched page title together with the URL that was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle {
    pub url: String,
    pub title: String,
}

/// Fetch `url` and return its normalized page title.
///
/// A missing scheme is replaced by `https://`. Only the first
/// [`MAX_BODY_BYTES`] of the body are inspected.
pub async fn fetch_title(client: &Client, url: &str) -> Result<PageTitle, GhtError> {
    let url = normalize_url_scheme(url);
    tracing::debug!(%url, "fetching page");

    let resp = client.get(&url).send().await.map_err(FetchError::Request)?;

    let status = resp.status();
    tracing::debug!(%status, "received response");
    if !status.is_success() {
        return Err(FetchError::Status(status).into());
    }

    let body = read_capped_body(resp, MAX_BODY_BYTES).await?;
    tracing::debug!(bytes = body.len(), "read response body");

    let title = extract_title(&String::from_utf8_lossy(&body))?;
    Ok(PageTitle { url, title })
}

/// Read at most `limit` bytes of the response body.
///
/// Bytes past the limit are left unread; that is not an error.
pub async fn read_capped_body(mut resp: Response, limit: usize) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();
    while body.len() < limit {
        let Some(chunk) = resp.chunk().await.map_err(FetchError::Body)? else {
            break;
        };
        let take = chunk.len().min(limit - body.len());
        body.extend_from_slice(&chunk[..take]);
    }
    Ok(body)
}
