//! `/v1/*` pass-through to the remote API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client talks to the same origin that served it; this handler
//! forwards those calls to `API_UPSTREAM_URL` unchanged. It adds no API
//! semantics: method, path, query, body, and end-to-end headers go through
//! as-is, and the upstream status and body come back as-is.
//!
//! ERROR HANDLING
//! ==============
//! Only failures of the hop itself are reported here, as JSON
//! `{"message": ...}` bodies the client's error mapping already reads.

use axum::Json;
use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;

/// Largest request body forwarded upstream (resume uploads included).
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Display text of the error `to_bytes` raises once the limit is hit.
const LENGTH_LIMIT_MESSAGE: &str = "length limit exceeded";

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("API upstream is not configured")]
    NotConfigured,
    #[error("request body could not be read: {0}")]
    Body(String),
    #[error("request body exceeds {} bytes", MAX_BODY_BYTES)]
    PayloadTooLarge,
    #[error("API upstream timed out")]
    Timeout,
    #[error("API upstream unreachable: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotConfigured | Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl From<axum::Error> for ProxyError {
    fn from(e: axum::Error) -> Self {
        let mut source: Option<&(dyn std::error::Error + 'static)> = Some(&e as &(dyn std::error::Error + 'static));
        while let Some(err) = source {
            if err.to_string() == LENGTH_LIMIT_MESSAGE {
                return Self::PayloadTooLarge;
            }
            source = err.source();
        }
        Self::Body(e.to_string())
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        (self.status(), Json(ErrorBody { message: self.to_string() })).into_response()
    }
}

/// Join the upstream base with the request path and optional query.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = if path.starts_with('/') { path.to_string() } else { format!("/{path}") };
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}{path}?{q}"),
        None => format!("{base}{path}"),
    }
}

/// Headers meaningful only for a single transport hop (RFC 9110 §7.6.1).
fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Copy end-to-end headers; `Host` and `Content-Length` are recomputed per hop.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name) && **name != header::HOST && **name != header::CONTENT_LENGTH)
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Whether the declared `Content-Length` is already over the forwarding limit.
pub fn declared_too_large(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .is_some_and(|len| len > MAX_BODY_BYTES as u64)
}

/// Forward one request to the upstream API.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let Some(base) = state.config.api_upstream.as_deref() else {
        return Err(ProxyError::NotConfigured);
    };

    let (parts, body) = req.into_parts();
    let url = upstream_url(base, parts.uri.path(), parts.uri.query());
    if declared_too_large(&parts.headers) {
        return Err(ProxyError::PayloadTooLarge);
    }
    let body = to_bytes(body, MAX_BODY_BYTES).await?;

    tracing::debug!(method = %parts.method, %url, "proxying");
    let upstream = state
        .http
        .request(parts.method, &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    if status.is_server_error() {
        tracing::warn!(%status, %url, "upstream error");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
