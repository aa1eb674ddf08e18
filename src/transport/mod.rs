//! HTTP plumbing shared by the async and blocking clients.
//!
//! Both transports build the same requests and funnel every response through
//! [`finish`], so status mapping, message extraction and decoding behave the
//! same regardless of the I/O model.

mod http;
pub use http::HttpTransport;

#[cfg(feature = "blocking")]
mod blocking;
#[cfg(feature = "blocking")]
pub use blocking::BlockingTransport;

use crate::error_code::ErrorCode;
use crate::{Error, ErrorContext, Result};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::time::Instant;
use tracing::{debug, info};
use url::Url;

/// Correlation id attached to every service call.
pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";

/// Service endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint<'a> {
    Classify,
    Feedback,
    ProjectStats(&'a str),
    Health,
}

impl Endpoint<'_> {
    pub(crate) fn method(&self) -> Method {
        match self {
            Endpoint::Classify | Endpoint::Feedback => Method::POST,
            Endpoint::ProjectStats(_) | Endpoint::Health => Method::GET,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Endpoint::Classify => "classify",
            Endpoint::Feedback => "feedback",
            Endpoint::ProjectStats(_) => "project_stats",
            Endpoint::Health => "health",
        }
    }

    /// Full URL under `base`. Any path prefix on `base` is kept; path
    /// parameters are percent-encoded as single segments.
    pub(crate) fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::configuration_with_context(
                    "base URL cannot carry a path",
                    ErrorContext::new()
                        .with_field_path("base_url")
                        .with_details(base.as_str()),
                )
            })?;
            segments.pop_if_empty();
            match self {
                Endpoint::Classify => {
                    segments.push("classify");
                }
                Endpoint::Feedback => {
                    segments.push("feedback");
                }
                Endpoint::ProjectStats(project_id) => {
                    segments.push("projects").push(project_id).push("stats");
                }
                Endpoint::Health => {
                    segments.push("health");
                }
            }
        }
        Ok(url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TransportError::Http(e) if e.is_timeout() => ErrorCode::Timeout,
            _ => ErrorCode::Network,
        }
    }
}

/// Turn a received response into a typed result or the mapped error.
pub(crate) fn finish<T: DeserializeOwned>(
    endpoint: Endpoint<'_>,
    request_id: &str,
    started: Instant,
    status: u16,
    headers: &HeaderMap,
    body: &str,
) -> Result<T> {
    if (200..300).contains(&status) {
        debug!(
            http_status = status,
            endpoint = endpoint.name(),
            request_id,
            duration_ms = started.elapsed().as_millis(),
            "classifai request succeeded"
        );
        return serde_json::from_str(body).map_err(|e| Error::unexpected_response(status, e));
    }

    let err = Error::from_status(status, error_message(status, body), retry_after_ms(headers));
    info!(
        http_status = status,
        error_code = err.code().code(),
        endpoint = endpoint.name(),
        request_id,
        duration_ms = started.elapsed().as_millis(),
        "classifai request failed"
    );
    Err(err)
}

/// Human-readable message from an error body.
///
/// JSON bodies contribute `error` (a string, or an object with `message`) and
/// `detail`, joined as `"<error>: <detail>"`. Other bodies are used verbatim.
pub(crate) fn error_message(status: u16, body: &str) -> String {
    let body = body.trim();
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        if !body.is_empty() {
            return body.to_string();
        }
        return reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Unknown error")
            .to_string();
    };

    let error = match json.get("error") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(serde_json::Value::Object(obj)) => obj
            .get("message")
            .and_then(|m| m.as_str())
            .map(String::from),
        _ => None,
    };
    let detail = match json.get("detail") {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };

    match (error, detail) {
        (Some(error), Some(detail)) => format!("{}: {}", error, detail),
        (Some(error), None) => error,
        (None, Some(detail)) => detail,
        (None, None) => "Unknown error".to_string(),
    }
}

fn header_first(headers: &HeaderMap, names: &[&str]) -> Option<String> {
    for name in names {
        if let Some(v) = headers.get(*name) {
            if let Ok(s) = v.to_str() {
                let s = s.trim();
                if !s.is_empty() {
                    return Some(s.to_string());
                }
            }
        }
    }
    None
}

/// `Retry-After: <seconds>` in milliseconds. HTTP-date values are ignored.
pub(crate) fn retry_after_ms(headers: &HeaderMap) -> Option<u64> {
    let raw = header_first(headers, &["retry-after"])?;
    let secs: u64 = raw.parse().ok()?;
    Some(secs.saturating_mul(1000))
}

/// Validate a URL the normalizer decided to download.
pub(crate) fn parse_remote(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|e| Error::content_fetch(raw, format!("invalid URL: {}", e), None))
}

pub(crate) fn fetch_failed(raw: &str, err: reqwest::Error) -> Error {
    let message = if err.is_timeout() {
        format!("download timed out: {}", err)
    } else {
        format!("download failed: {}", err)
    };
    Error::content_fetch(raw, message, err.status().map(|s| s.as_u16()))
}
