use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ChatError;

const MAX_BODY_EXCERPT: usize = 200;

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    r#type: Option<String>,
    // OpenAI sends a string; some compatible servers send the HTTP status as a number.
    #[serde(default)]
    code: Option<Value>,
}

impl ErrorBody {
    fn code_text(&self) -> Option<String> {
        match self.code.as_ref()? {
            Value::String(code) => Some(code.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    fn has_marker(&self, markers: &[&str]) -> bool {
        [self.code_text(), self.r#type.clone()]
            .into_iter()
            .flatten()
            .any(|value| markers.iter().any(|m| value.eq_ignore_ascii_case(m)))
    }
}

/// Maps a non-success HTTP response from the completion endpoint to a [`ChatError`].
pub fn classify_http_error(status: StatusCode, body: &str) -> ChatError {
    let parsed = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|wrapper| wrapper.error);

    let quota = status == StatusCode::TOO_MANY_REQUESTS
        || parsed
            .as_ref()
            .is_some_and(|e| e.has_marker(&["insufficient_quota", "rate_limit_exceeded"]));
    if quota {
        return ChatError::QuotaExceeded;
    }

    let auth = status == StatusCode::UNAUTHORIZED
        || parsed
            .as_ref()
            .is_some_and(|e| e.has_marker(&["invalid_api_key"]));
    if auth {
        return ChatError::AuthenticationFailed;
    }

    let message = parsed
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback_message(status, body));

    ChatError::endpoint(message)
}

fn fallback_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    // StatusCode's Display already carries the canonical reason.
    if body.is_empty() {
        return format!("HTTP {status}");
    }

    let excerpt: String = body.chars().take(MAX_BODY_EXCERPT).collect();
    format!("HTTP {}: {excerpt}", status.as_u16())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_many_requests_is_quota() {
        let err = classify_http_error(StatusCode::TOO_MANY_REQUESTS, "");
        assert!(matches!(err, ChatError::QuotaExceeded));
    }

    #[test]
    fn test_insufficient_quota_code_is_quota() {
        let body = r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota","code":"insufficient_quota"}}"#;
        let err = classify_http_error(StatusCode::FORBIDDEN, body);
        assert!(matches!(err, ChatError::QuotaExceeded));
    }

    #[test]
    fn test_unauthorized_is_authentication() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#;
        let err = classify_http_error(StatusCode::UNAUTHORIZED, body);
        assert!(matches!(err, ChatError::AuthenticationFailed));
    }

    #[test]
    fn test_invalid_api_key_code_without_401() {
        let body = r#"{"error":{"message":"bad key","code":"invalid_api_key"}}"#;
        let err = classify_http_error(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, ChatError::AuthenticationFailed));
    }

    #[test]
    fn test_other_status_passes_message_through() {
        let body = r#"{"error":{"message":"The model `gpt-9` does not exist","type":"invalid_request_error","code":"model_not_found"}}"#;
        let err = classify_http_error(StatusCode::NOT_FOUND, body);
        match err {
            ChatError::EndpointError(message) => {
                assert_eq!(message, "The model `gpt-9` does not exist");
            }
            other => panic!("expected EndpointError, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_uses_canonical_reason_once() {
        let err = classify_http_error(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(
            err.to_string(),
            "OpenAI API Error: HTTP 500 Internal Server Error"
        );
    }

    #[test]
    fn test_numeric_code_keeps_message() {
        let body = r#"{"error":{"message":"Context length exceeded","type":"invalid_request_error","code":400}}"#;
        let err = classify_http_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.to_string(), "OpenAI API Error: Context length exceeded");
    }

    #[test]
    fn test_numeric_code_still_checks_type_marker() {
        let body = r#"{"error":{"message":"quota","type":"insufficient_quota","code":403}}"#;
        let err = classify_http_error(StatusCode::FORBIDDEN, body);
        assert!(matches!(err, ChatError::QuotaExceeded));
    }

    #[test]
    fn test_non_json_body_excerpt_uses_numeric_status() {
        let err = classify_http_error(StatusCode::BAD_GATEWAY, "upstream unavailable");
        assert_eq!(
            err.to_string(),
            "OpenAI API Error: HTTP 502: upstream unavailable"
        );
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(1000);
        let ChatError::EndpointError(message) = classify_http_error(StatusCode::BAD_REQUEST, &body)
        else {
            panic!("expected EndpointError");
        };
        assert!(message.len() < 300);
    }
}
