//! HTTP response type for the microCMS SDK.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// An HTTP response from the content API.
///
/// The body is kept as raw text; callers decode it with [`HttpResponse::json`].
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }

    /// Extracts the error message from a microCMS error body.
    ///
    /// Error bodies look like `{"message": "..."}`. Falls back to the status
    /// reason phrase, then to the bare status code.
    #[must_use]
    pub fn error_message(&self) -> String {
        serde_json::from_str::<serde_json::Value>(&self.body)
            .ok()
            .and_then(|body| body.get("message").and_then(|m| m.as_str()).map(String::from))
            .or_else(|| {
                reqwest::StatusCode::from_u16(self.code)
                    .ok()
                    .and_then(|status| status.canonical_reason())
                    .map(String::from)
            })
            .unwrap_or_else(|| format!("status {}", self.code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body.to_string())
    }

    #[test]
    fn test_is_ok_returns_true_for_2xx() {
        for code in 200..=299 {
            assert!(response(code, "{}").is_ok(), "Expected is_ok() for {code}");
        }
    }

    #[test]
    fn test_is_ok_returns_false_for_4xx_and_5xx() {
        for code in [400, 401, 404, 429, 500, 503] {
            assert!(!response(code, "{}").is_ok());
        }
    }

    #[test]
    fn test_request_id_extraction() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);

        let response = HttpResponse::new(200, headers, String::new());
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
    }

    #[test]
    fn test_json_decodes_body() {
        let value: serde_json::Value = response(200, r#"{"id":"1","title":"x"}"#)
            .json()
            .unwrap();
        assert_eq!(value, serde_json::json!({"id": "1", "title": "x"}));
    }

    #[test]
    fn test_json_rejects_invalid_body() {
        let result: Result<serde_json::Value, _> = response(200, "<html>").json();
        assert!(result.is_err());
    }

    #[test]
    fn test_error_message_prefers_body_message() {
        let response = response(404, r#"{"message":"Content is not found."}"#);
        assert_eq!(response.error_message(), "Content is not found.");
    }

    #[test]
    fn test_error_message_falls_back_to_reason_phrase() {
        assert_eq!(response(404, "").error_message(), "Not Found");
        assert_eq!(response(500, "oops").error_message(), "Internal Server Error");
        assert_eq!(response(599, "").error_message(), "status 599");
    }
}
