/*
[INPUT]:  Construction, attach and write failures in the markup builder
[OUTPUT]: Structured XML builder errors
[POS]:    XML layer - error types
[UPDATE]: When adding new builder failure modes
*/

use thiserror::Error;

/// Errors raised while building or serializing an element tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum XmlError {
    /// Attribute key is not in the element's whitelist
    #[error("invalid attribute {attribute} for {element}")]
    InvalidAttribute { attribute: String, element: String },

    /// Element requires body text and none was given
    #[error("no {expected} set for {element}")]
    MissingBody {
        element: String,
        expected: &'static str,
    },

    /// Body text given to a kind that never carries one
    #[error("{element} takes no body")]
    UnexpectedBody { element: String },

    /// Child kind is not allowed under the parent kind
    #[error("{child} not nestable in {parent}")]
    NotNestable { child: String, parent: String },

    /// Unknown element tag name
    #[error("unknown element {0}")]
    UnknownElement(String),

    /// XML writer failed
    #[error("XML write error: {0}")]
    Write(String),
}

impl XmlError {
    /// Name of the element the error refers to (the parent for nesting errors)
    pub fn element(&self) -> Option<&str> {
        match self {
            XmlError::InvalidAttribute { element, .. }
            | XmlError::MissingBody { element, .. }
            | XmlError::UnexpectedBody { element } => Some(element),
            XmlError::NotNestable { parent, .. } => Some(parent),
            XmlError::UnknownElement(_) | XmlError::Write(_) => None,
        }
    }
}

/// Result type alias for markup builder operations
pub type Result<T> = std::result::Result<T, XmlError>;
