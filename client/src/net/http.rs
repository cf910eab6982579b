//! HTTP transport shared by every API wrapper.
//!
//! Client-side (hydrate): real requests via `gloo-net`, sent with browser
//! credentials and the stored bearer token when one exists.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses surface the server's own message so pages can show it
//! verbatim. Nothing here retries, caches, or times out on its own.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("missing required parameter: {0}")]
    MissingParam(&'static str),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for server-reported failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the session.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Return `value` when it is non-blank.
///
/// # Errors
///
/// Returns [`ApiError::MissingParam`] naming `name` when `value` is blank.
pub fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::MissingParam(name))
    } else {
        Ok(trimmed)
    }
}

/// Pick the human-readable message out of an error response body.
///
/// JSON bodies are searched for `message`, `detail`, then `error`; other
/// bodies are used as-is; an empty body falls back to the status code.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "detail", "error"] {
            if let Some(serde_json::Value::String(msg)) = map.get(key) {
                if !msg.trim().is_empty() {
                    return msg.clone();
                }
            }
        }
    }
    let body = body.trim();
    if body.is_empty() {
        format!("request failed with status {status}")
    } else {
        body.to_owned()
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer_header, error_message};
    use crate::config::ClientConfig;

    pub(super) fn url(path: &str) -> String {
        ClientConfig::default().api_url(path)
    }

    pub(super) fn authorize(builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.credentials(web_sys::RequestCredentials::Include);
        match crate::util::session::load_token() {
            Some(token) => builder.header("Authorization", &bearer_header(&token)),
            None => builder,
        }
    }

    pub(super) async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        leptos::logging::warn!("api error {status}: {message}");
        Err(ApiError::Status { status, message })
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) fn transport_err(e: gloo_net::Error) -> ApiError {
        ApiError::Transport(e.to_string())
    }
}

/// `GET path` and decode the JSON body.
///
/// # Errors
///
/// Fails on transport errors, non-2xx responses, or an undecodable body.
pub async fn api_get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::authorize(gloo_net::http::Request::get(&transport::url(path)));
        let resp = req.send().await.map_err(transport::transport_err)?;
        transport::decode(transport::check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST path` with a JSON body and decode the JSON response.
///
/// # Errors
///
/// Fails on transport errors, non-2xx responses, or an undecodable body.
pub async fn api_post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::authorize(gloo_net::http::Request::post(&transport::url(path)))
            .json(body)
            .map_err(transport::transport_err)?;
        let resp = req.send().await.map_err(transport::transport_err)?;
        transport::decode(transport::check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `POST path` without a body, ignoring any response body.
///
/// # Errors
///
/// Fails on transport errors or non-2xx responses.
pub async fn api_post_empty(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::authorize(gloo_net::http::Request::post(&transport::url(path)));
        let resp = req.send().await.map_err(transport::transport_err)?;
        transport::check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `PUT path` with a JSON body and decode the JSON response.
///
/// # Errors
///
/// Fails on transport errors, non-2xx responses, or an undecodable body.
pub async fn api_put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::authorize(gloo_net::http::Request::put(&transport::url(path)))
            .json(body)
            .map_err(transport::transport_err)?;
        let resp = req.send().await.map_err(transport::transport_err)?;
        transport::decode(transport::check(resp).await?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE path`, ignoring any response body.
///
/// # Errors
///
/// Fails on transport errors or non-2xx responses.
pub async fn api_delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let req = transport::authorize(gloo_net::http::Request::delete(&transport::url(path)));
        let resp = req.send().await.map_err(transport::transport_err)?;
        transport::check(resp).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST path` with a multipart body and decode the JSON response.
///
/// The browser sets the multipart boundary, so no `Content-Type` is sent.
///
/// # Errors
///
/// Fails on transport errors, non-2xx responses, or an undecodable body.
#[cfg(feature = "hydrate")]
pub async fn api_upload<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
    let req = transport::authorize(gloo_net::http::Request::post(&transport::url(path)))
        .body(form)
        .map_err(transport::transport_err)?;
    let resp = req.send().await.map_err(transport::transport_err)?;
    transport::decode(transport::check(resp).await?).await
}
