/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Plivo adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod http;
pub mod types;
pub mod xml;

pub use config::PlivoConfig;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Credentials,
    PlivoClient,
    PlivoError,
    Result,
    compute_signature,
    validate_signature,
};

// Re-export all types
pub use types::*;

// Re-export commonly used types from xml
pub use xml::{
    AttrValue,
    Attributes,
    Element,
    ElementKind,
    XmlError,
};
