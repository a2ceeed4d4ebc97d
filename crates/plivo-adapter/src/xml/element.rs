/*
[INPUT]:  Element kind, optional body text, attribute map, child elements
[OUTPUT]: Validated element tree nodes
[POS]:    XML layer - tree construction and nesting rules
[UPDATE]: When changing construction validation or the builder API
*/

use tracing::trace;

use super::error::{Result, XmlError};
use super::kind::ElementKind;
use super::value::Attributes;

/// A node of a Plivo XML document
///
/// Attributes are validated and normalized when the node is built. After
/// that only the children sequence changes, through [`Element::add`].
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    body: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
}

impl Element {
    /// Build an element of any kind
    ///
    /// Empty and `"0"` bodies count as absent. Fails with
    /// [`XmlError::MissingBody`] when a kind that needs body text gets none,
    /// with [`XmlError::UnexpectedBody`] when a container or empty kind gets
    /// some, then with [`XmlError::InvalidAttribute`] on the first key
    /// outside the kind's whitelist.
    pub fn new(
        kind: ElementKind,
        body: Option<String>,
        attributes: Attributes,
    ) -> Result<Self> {
        let body = body.filter(|text| !text.is_empty() && text != "0");
        match (&body, kind.body_requirement()) {
            (None, Some(expected)) => {
                return Err(XmlError::MissingBody {
                    element: kind.name().to_string(),
                    expected,
                });
            }
            (Some(_), _) if !kind.takes_body() => {
                return Err(XmlError::UnexpectedBody {
                    element: kind.name().to_string(),
                });
            }
            _ => {}
        }

        let mut normalized = Vec::with_capacity(attributes.len());
        for (key, value) in attributes {
            if !kind.accepts_attribute(&key) {
                return Err(XmlError::InvalidAttribute {
                    attribute: key,
                    element: kind.name().to_string(),
                });
            }
            normalized.push((key, value.normalize()));
        }

        Ok(Self {
            kind,
            body,
            attributes: normalized,
            children: Vec::new(),
        })
    }

    /// Root `<Response>` element
    pub fn response() -> Self {
        Self {
            kind: ElementKind::Response,
            body: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn dial(attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Dial, None, attributes)
    }

    /// `<Number>`; body is the phone number to dial
    pub fn number(number: impl Into<String>, attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Number, Some(number.into()), attributes)
    }

    /// `<User>`; body is the SIP endpoint to dial
    pub fn user(user: impl Into<String>, attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::User, Some(user.into()), attributes)
    }

    /// `<Play>`; body is the URL of the audio file
    pub fn play(url: impl Into<String>, attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Play, Some(url.into()), attributes)
    }

    pub fn speak(text: impl Into<String>, attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Speak, Some(text.into()), attributes)
    }

    pub fn get_digits(attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::GetDigits, None, attributes)
    }

    pub fn record(attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Record, None, attributes)
    }

    pub fn hangup(attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Hangup, None, attributes)
    }

    /// `<Redirect>`; body is the URL that supplies the next document
    pub fn redirect(url: impl Into<String>, attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Redirect, Some(url.into()), attributes)
    }

    pub fn wait(attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Wait, None, attributes)
    }

    /// `<Conference>`; body is the conference room name
    pub fn conference(name: impl Into<String>, attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Conference, Some(name.into()), attributes)
    }

    pub fn pre_answer(attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::PreAnswer, None, attributes)
    }

    /// `<Message>`; body is the SMS text
    pub fn message(text: impl Into<String>, attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Message, Some(text.into()), attributes)
    }

    /// `<DTMF>`; body is the digit string to send
    pub fn dtmf(digits: impl Into<String>, attributes: Attributes) -> Result<Self> {
        Self::new(ElementKind::Dtmf, Some(digits.into()), attributes)
    }

    /// Attach `child` as the last child and return it for chaining
    ///
    /// ```
    /// use plivo_adapter::xml::{Attributes, Element};
    ///
    /// let mut response = Element::response();
    /// response
    ///     .add(Element::dial(Attributes::new().set("callerId", "15551230000"))?)?
    ///     .add(Element::number("15559870000", Attributes::new())?)?;
    /// assert_eq!(response.children()[0].children().len(), 1);
    /// # Ok::<(), plivo_adapter::xml::XmlError>(())
    /// ```
    pub fn add(&mut self, child: Element) -> Result<&mut Element> {
        if !self.kind.can_nest(child.kind) {
            return Err(XmlError::NotNestable {
                child: child.kind.name().to_string(),
                parent: self.kind.name().to_string(),
            });
        }

        trace!(parent = %self.kind, child = %child.kind, "attaching element");
        self.children.push(child);
        let index = self.children.len() - 1;
        Ok(&mut self.children[index])
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Normalized attributes in insertion order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}
