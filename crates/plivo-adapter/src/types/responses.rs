/*
[INPUT]:  HTTP status code and raw response body
[OUTPUT]: Status/body pair returned by every REST operation
[POS]:    Data layer - response wrapper
[UPDATE]: When response decoding rules change
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single REST call
///
/// Non-2xx statuses are returned here as well; inspect [`ApiResponse::status`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    /// Decoded JSON body, `None` when the body is empty or not JSON
    pub body: Option<Value>,
}

impl ApiResponse {
    /// Build a response from the raw body text
    pub fn from_body(status: u16, raw: &str) -> Self {
        let body = if raw.trim().is_empty() {
            None
        } else {
            serde_json::from_str(raw).ok()
        };
        Self { status, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Look up a top-level field of a JSON object body
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_json() {
        let response = ApiResponse::from_body(201, r#"{"api_id": "abc", "message": "created"}"#);
        assert!(response.is_success());
        assert_eq!(response.field("message"), Some(&json!("created")));
    }

    #[test]
    fn test_from_body_empty_or_invalid() {
        assert_eq!(ApiResponse::from_body(204, "").body, None);
        assert_eq!(ApiResponse::from_body(500, "<html>oops</html>").body, None);
        assert!(!ApiResponse::from_body(404, "").is_success());
    }
}
