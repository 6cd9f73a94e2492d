//! Error bodies returned by CyREST on non-2xx responses.

use serde::{Deserialize, Serialize};

/// One entry of the `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    /// HTTP status the application assigned to this error.
    pub status: u16,

    /// Machine-readable URN, e.g. `urn:cytoscape:ci:cyrest-core:v1:networks:errors:1`.
    #[serde(rename = "type", default)]
    pub error_type: String,

    /// Human-readable description of the problem.
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// The JSON body CyREST sends for errors.
///
/// ```json
/// { "data": {}, "errors": [ { "status": 404, "type": "urn:...", "message": "Network not found" } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ErrorResponse {
    #[serde(default)]
    pub data: serde_json::Value,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

impl ErrorResponse {
    /// A single-error body.
    pub fn new(status: u16, error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            data: serde_json::json!({}),
            errors: vec![ErrorDetail {
                status,
                error_type: error_type.into(),
                message: message.into(),
                link: None,
            }],
        }
    }

    /// All messages joined with `"; "`, or `None` when there are none.
    pub fn message(&self) -> Option<String> {
        if self.errors.is_empty() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// Error type URNs used by the mock server.
pub mod codes {
    pub const NOT_FOUND: &str = "urn:cytoscape:ci:cyrest-core:v1:errors:not-found";
    pub const INVALID_PARAMETER: &str = "urn:cytoscape:ci:cyrest-core:v1:errors:invalid-parameter";
    pub const COMMAND_FAILED: &str = "urn:cytoscape:ci:cyrest-core:v1:errors:command-failed";
    pub const INTERNAL_ERROR: &str = "urn:cytoscape:ci:cyrest-core:v1:errors:internal";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cyrest_error_body() {
        let json = r#"{"data":{},"errors":[{"status":404,"type":"urn:cytoscape:ci:cyrest-core:v1:networks:errors:1","message":"Network 99 not found","link":"file:/tmp/log"}]}"#;
        let e: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(e.errors[0].status, 404);
        assert_eq!(e.message().as_deref(), Some("Network 99 not found"));
    }

    #[test]
    fn empty_errors_have_no_message() {
        let e: ErrorResponse = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert_eq!(e.message(), None);
    }

    #[test]
    fn messages_are_joined() {
        let mut e = ErrorResponse::new(500, codes::INTERNAL_ERROR, "first");
        e.errors.push(ErrorDetail {
            status: 500,
            error_type: codes::INTERNAL_ERROR.into(),
            message: "second".into(),
            link: None,
        });
        assert_eq!(e.message().as_deref(), Some("first; second"));
    }
}
