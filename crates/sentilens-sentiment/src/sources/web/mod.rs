//! Web page fetching for URL sources.

mod html;

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use thiserror::Error;

use crate::types::MAX_URL_TEXT_CHARS;

use html::visible_text;

/// Bytes of response body read before the rest is discarded.
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

#[derive(Debug, Error)]
enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("non-text content type {content_type:?} from {url}")]
    NotText { content_type: String, url: String },
}

/// HTTP client for pulling readable text out of web pages.
pub(crate) struct WebFetcher {
    client: Client,
}

impl WebFetcher {
    /// Creates a fetcher with a bounded total timeout and the given `User-Agent`.
    pub(crate) fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a page and return its visible text, capped at
    /// [`MAX_URL_TEXT_CHARS`] characters.
    ///
    /// Never fails: network errors, timeouts, error statuses and non-text
    /// responses are logged and produce an empty string.
    pub(crate) async fn fetch_text(&self, raw_url: &str) -> String {
        let url = normalize_url(raw_url);
        match self.fetch_html(&url).await {
            Ok(body) => {
                let text = visible_text(&body, MAX_URL_TEXT_CHARS);
                tracing::debug!(url = %url, chars = text.chars().count(), "extracted page text");
                text
            }
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "URL extraction yielded no text");
                String::new()
            }
        }
    }

    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let mut response = self
            .client
            .get(url)
            .header(ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !is_textual(content_type) {
                return Err(FetchError::NotText {
                    content_type: content_type.to_string(),
                    url: url.to_string(),
                });
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if !append_capped(&mut body, &chunk, MAX_BODY_BYTES) {
                tracing::debug!(url = %url, limit = MAX_BODY_BYTES, "response body truncated");
                break;
            }
        }
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Append as much of `chunk` as fits under `limit`. Returns `false` once the
/// limit is reached.
fn append_capped(body: &mut Vec<u8>, chunk: &[u8], limit: usize) -> bool {
    let room = limit.saturating_sub(body.len());
    if chunk.len() >= room {
        body.extend_from_slice(&chunk[..room]);
        return false;
    }
    body.extend_from_slice(chunk);
    true
}

/// Prepend `https://` when the URL carries no `http`/`https` scheme.
pub(crate) fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

fn is_textual(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("text/") || mime.ends_with("+xml") || mime == "application/xml"
}
