/*
[INPUT]:  Error sources (client setup, parameters, HTTP, serialization, config)
[OUTPUT]: Structured error types for REST operations
[POS]:    Error handling layer - unified error type for the REST client
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::xml::XmlError;

/// Main error type for Plivo REST operations
#[derive(Error, Debug)]
pub enum PlivoError {
    /// Client built without an auth id or auth token
    #[error("no {field}")]
    MissingCredential { field: &'static str },

    /// Operation called without its required positional parameter
    #[error("{name} parameter not found")]
    MissingParameter { name: String },

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Markup builder error surfaced through the client API
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),
}

impl PlivoError {
    /// Check if the error came from the network layer rather than the caller
    pub fn is_transport_error(&self) -> bool {
        matches!(self, PlivoError::Http(_))
    }

    /// Check if the error is a caller mistake that retrying cannot fix
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            PlivoError::MissingCredential { .. }
                | PlivoError::MissingParameter { .. }
                | PlivoError::Config(_)
                | PlivoError::Xml(_)
        )
    }

    pub(crate) fn missing_parameter(name: impl Into<String>) -> Self {
        PlivoError::MissingParameter { name: name.into() }
    }
}

/// Result type alias for Plivo operations
pub type Result<T> = std::result::Result<T, PlivoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PlivoError::MissingCredential { field: "auth_id" }.to_string(),
            "no auth_id"
        );
        assert_eq!(
            PlivoError::missing_parameter("call_uuid").to_string(),
            "call_uuid parameter not found"
        );
    }

    #[test]
    fn test_error_classification() {
        let err = PlivoError::missing_parameter("number");
        assert!(err.is_usage_error());
        assert!(!err.is_transport_error());

        let err = PlivoError::Config("bad yaml".to_string());
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_xml_error_conversion() {
        let err: PlivoError = XmlError::NotNestable {
            child: "Dial".to_string(),
            parent: "Dial".to_string(),
        }
        .into();
        assert!(matches!(err, PlivoError::Xml(_)));
        assert_eq!(err.to_string(), "XML error: Dial not nestable in Dial");
    }
}
