/*
[INPUT]:  Element kinds, body text and attribute maps
[OUTPUT]: Validated call-control element trees and their XML text
[POS]:    XML layer - Plivo XML markup builder
[UPDATE]: When adding element kinds or changing serialization
*/

pub mod element;
pub mod error;
pub mod kind;
pub mod render;
pub mod value;

pub use element::Element;
pub use error::{Result, XmlError};
pub use kind::ElementKind;
pub use render::XML_HEADER;
pub use value::{AttrValue, Attributes};
