//! HTTP client for pageprobe
//!
//! One GET per call. Auth headers come from an explicit options struct, not
//! ambient state; the body is streamed against a deadline so a stalling
//! server yields partial content instead of hanging the prompt.

use crate::error::FetchError;
use crate::DEFAULT_USER_AGENT;
use bytes::Bytes;
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use std::time::{Duration, Instant};
use tracing::{error, warn};

/// Connect timeout (connection + first response byte)
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Body timeout (total)
const BODY_TIMEOUT: Duration = Duration::from_secs(30);

/// Organization header required by some API endpoints
const ORG_ID_HEADER: HeaderName = HeaderName::from_static("x-org-id");

/// Fetch options configured once at startup
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Custom User-Agent
    pub user_agent: Option<String>,
    /// OAuth token sent as `Authorization: OAuth <token>`
    pub auth_token: Option<String>,
    /// Value for the `X-Org-Id` header
    pub org_id: Option<String>,
}

/// One fetched response, handed to the extraction pipeline
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// The URL that was fetched (base for link resolution)
    pub url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Content-Type header value, empty when absent
    pub content_type: String,
    /// Content-Length header value, when declared
    pub content_length: Option<u64>,
    /// Wall time of the request
    pub elapsed: Duration,
    /// True if the body read hit the deadline and is partial
    pub truncated: bool,
    /// Raw body bytes
    pub body: Bytes,
}

/// Fetch a URL and return the raw response.
pub async fn fetch(url: &str, options: &FetchOptions) -> Result<FetchedResponse, FetchError> {
    if url.is_empty() {
        return Err(FetchError::MissingUrl);
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(FetchError::InvalidUrlScheme);
    }
    url::Url::parse(url).map_err(FetchError::InvalidUrl)?;

    let mut headers = HeaderMap::new();
    let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_USER_AGENT)),
    );
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/html, */*"),
    );
    if let Some(ref token) = options.auth_token {
        if let Ok(value) = HeaderValue::from_str(&format!("OAuth {token}")) {
            headers.insert(AUTHORIZATION, value);
        }
    }
    if let Some(ref org_id) = options.org_id {
        if let Ok(value) = HeaderValue::from_str(org_id) {
            headers.insert(ORG_ID_HEADER, value);
        }
    }

    let client = reqwest::Client::builder()
        .default_headers(headers)
        .connect_timeout(CONNECT_TIMEOUT)
        .timeout(CONNECT_TIMEOUT)
        .build()
        .map_err(FetchError::ClientBuild)?;

    let started = Instant::now();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(FetchError::from_reqwest)?;

    let status_code = response.status().as_u16();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let content_length: Option<u64> = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok());

    let (body, truncated) = read_body_with_timeout(response, BODY_TIMEOUT).await;

    Ok(FetchedResponse {
        url: url.to_string(),
        status_code,
        content_type,
        content_length,
        elapsed: started.elapsed(),
        truncated,
        body,
    })
}

/// Read the body against a deadline, keeping whatever arrived on timeout.
async fn read_body_with_timeout(response: reqwest::Response, timeout: Duration) -> (Bytes, bool) {
    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    let deadline = tokio::time::Instant::now() + timeout;

    loop {
        let chunk_future = stream.next();
        let timeout_future = tokio::time::sleep_until(deadline);

        tokio::select! {
            chunk = chunk_future => {
                match chunk {
                    Some(Ok(bytes)) => {
                        body.extend_from_slice(&bytes);
                    }
                    Some(Err(e)) => {
                        error!("Error reading body chunk: {}", e);
                        let has_content = !body.is_empty();
                        return (Bytes::from(body), has_content);
                    }
                    None => {
                        return (Bytes::from(body), false);
                    }
                }
            }
            _ = timeout_future => {
                warn!("Body timeout reached, returning partial content");
                return (Bytes::from(body), true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_url_rejected() {
        let err = fetch("", &FetchOptions::default()).await.unwrap_err();
        assert!(matches!(err, FetchError::MissingUrl));
    }

    #[tokio::test]
    async fn test_bad_scheme_rejected() {
        for url in ["ftp://example.com", "example.com", "file:///etc/passwd"] {
            let err = fetch(url, &FetchOptions::default()).await.unwrap_err();
            assert!(matches!(err, FetchError::InvalidUrlScheme), "{url}");
        }
    }

    #[tokio::test]
    async fn test_unparseable_url_rejected() {
        let err = fetch("http://", &FetchOptions::default()).await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }
}
