//! Shared HTTP response helpers for the API client.
//!
//! Centralizes status-code checks (non-success → [`HierarchyError::Network`]
//! with the server's `{"error": ...}` message) and body decoding so the client
//! stays focused on request construction.

use serde::de::DeserializeOwned;

use crate::error::HierarchyError;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. On failure the reason is the
/// `error` field of a JSON body when present, the raw body when not, and the
/// canonical status text when the body is empty.
pub async fn check_response(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<reqwest::Response, HierarchyError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(HierarchyError::Network {
        endpoint: endpoint.to_string(),
        status: Some(status.as_u16()),
        reason: error_reason(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string()),
    })
}

/// Read the whole body and decode it as JSON.
pub async fn decode_json<T: DeserializeOwned>(
    resp: reqwest::Response,
    endpoint: &str,
) -> Result<T, HierarchyError> {
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| HierarchyError::transport(endpoint, &e))?;
    serde_json::from_slice(&bytes).map_err(|e| HierarchyError::Network {
        endpoint: endpoint.to_string(),
        status: None,
        reason: format!("malformed response body: {e}"),
    })
}

/// Pull a human message out of an error body.
fn error_reason(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let from_json = serde_json::from_str::<serde_json::Value>(trimmed)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string));
    Some(from_json.unwrap_or_else(|| trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[test]
    fn reason_prefers_json_error_field() {
        assert_eq!(
            error_reason(r#"{"error": "Missing name"}"#).as_deref(),
            Some("Missing name")
        );
    }

    #[test]
    fn reason_falls_back_to_raw_body() {
        assert_eq!(
            error_reason("<h1>Internal Server Error</h1>").as_deref(),
            Some("<h1>Internal Server Error</h1>")
        );
        assert_eq!(error_reason("   "), None);
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "[]");
        assert!(check_response(resp, "/api/areas").await.is_ok());
    }

    #[tokio::test]
    async fn check_response_server_error_carries_status_and_message() {
        let resp = mock_response(500, r#"{"error": "db down"}"#);
        let err = check_response(resp, "/api/systems").await.unwrap_err();
        assert_eq!(
            err,
            HierarchyError::Network {
                endpoint: "/api/systems".into(),
                status: Some(500),
                reason: "db down".into(),
            }
        );
    }

    #[tokio::test]
    async fn check_response_empty_body_uses_canonical_reason() {
        let resp = mock_response(404, "");
        let err = check_response(resp, "/api/lines/9").await.unwrap_err();
        assert!(matches!(
            err,
            HierarchyError::Network { status: Some(404), reason, .. } if reason == "Not Found"
        ));
    }

    #[tokio::test]
    async fn decode_json_reports_malformed_body() {
        let resp = mock_response(200, "not json");
        let err = decode_json::<Vec<serde_json::Value>>(resp, "/api/areas")
            .await
            .unwrap_err();
        assert!(matches!(err, HierarchyError::Network { status: None, .. }));
    }
}
