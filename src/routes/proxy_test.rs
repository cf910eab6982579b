use super::*;
use axum::http::HeaderValue;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_joins_base_path_and_query() {
    assert_eq!(
        upstream_url("http://api:8000", "/v1/resumes", Some("page=1&name=a%20b")),
        "http://api:8000/v1/resumes?page=1&name=a%20b"
    );
}

#[test]
fn upstream_url_handles_slashes_and_empty_query() {
    assert_eq!(upstream_url("http://api:8000/", "/v1/auth/me", None), "http://api:8000/v1/auth/me");
    assert_eq!(upstream_url("http://api:8000", "v1/audit/logs", Some("")), "http://api:8000/v1/audit/logs");
}

// =============================================================================
// forwardable_headers
// =============================================================================

#[test]
fn forwardable_headers_strips_hop_by_hop_and_host() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    headers.insert(header::COOKIE, HeaderValue::from_static("sid=1"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let out = forwardable_headers(&headers);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(header::AUTHORIZATION).unwrap(), "Bearer t");
    assert_eq!(out.get(header::COOKIE).unwrap(), "sid=1");
    assert!(out.get(header::HOST).is_none());
    assert!(out.get(header::CONNECTION).is_none());
}

#[test]
fn forwardable_headers_keeps_repeated_values() {
    let mut headers = HeaderMap::new();
    headers.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
    headers.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));
    let out = forwardable_headers(&headers);
    assert_eq!(out.get_all(header::SET_COOKIE).iter().count(), 2);
}

// =============================================================================
// ProxyError
// =============================================================================

#[test]
fn proxy_error_statuses() {
    assert_eq!(ProxyError::NotConfigured.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Body("truncated".into()).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ProxyError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[test]
fn declared_too_large_compares_against_limit() {
    let mut headers = HeaderMap::new();
    assert!(!declared_too_large(&headers));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(MAX_BODY_BYTES as u64));
    assert!(!declared_too_large(&headers));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(MAX_BODY_BYTES as u64 + 1));
    assert!(declared_too_large(&headers));
}

#[tokio::test]
async fn oversized_streamed_body_answers_413() {
    let body = Body::from(vec![0_u8; 16]);
    let err: ProxyError = to_bytes(body, 8).await.unwrap_err().into();
    assert!(matches!(err, ProxyError::PayloadTooLarge));
    assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn forward_rejects_declared_oversized_body_before_reading() {
    let config = crate::config::HostConfig {
        api_upstream: Some("http://127.0.0.1:9".into()),
        ..crate::config::HostConfig::default()
    };
    let state = AppState::new(config).unwrap();
    let req = Request::builder()
        .method("POST")
        .uri("/v1/files/upload")
        .header(header::CONTENT_LENGTH, MAX_BODY_BYTES + 1)
        .body(Body::empty())
        .unwrap();
    let err = forward(State(state), req).await.unwrap_err();
    assert!(matches!(err, ProxyError::PayloadTooLarge));
}

#[tokio::test]
async fn unconfigured_proxy_answers_502_with_message() {
    let response = ProxyError::NotConfigured.into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = to_bytes(response.into_body(), 1024).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "API upstream is not configured");
}

#[tokio::test]
async fn forward_without_upstream_is_not_configured() {
    let state = AppState::new(crate::config::HostConfig::default()).unwrap();
    let req = Request::builder().uri("/v1/auth/me").body(Body::empty()).unwrap();
    let err = forward(State(state), req).await.unwrap_err();
    assert!(matches!(err, ProxyError::NotConfigured));
}
