/*
[INPUT]:  HTTP client configuration, credentials and operation parameters
[OUTPUT]: Status/body responses from the Plivo REST API
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod account;
pub mod application;
pub mod call;
pub mod carrier;
pub mod client;
pub mod conference;
pub mod endpoint;
pub mod error;
pub mod message;
pub mod number;
pub mod recording;
pub mod signature;

pub use error::{PlivoError, Result};
pub use signature::{canonical_string, compute_signature, validate_signature};

pub use client::{ClientConfig, Credentials, PlivoClient, DEFAULT_API_VERSION, DEFAULT_BASE_URL};
