/*
[INPUT]:  Element trees
[OUTPUT]: UTF-8 XML text (declaration only on the Response root)
[POS]:    XML layer - serialization
[UPDATE]: When changing output formatting or escaping
*/

use std::fmt;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::element::Element;
use super::error::{Result, XmlError};

/// Declaration prepended to serialized `<Response>` documents
pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="utf-8" ?>"#;

impl Element {
    /// Serialize this element and its subtree
    ///
    /// A `<Response>` root gets [`XML_HEADER`] in front; any other element is
    /// rendered as a bare fragment.
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self)?;

        let fragment = String::from_utf8(writer.into_inner())
            .map_err(|e| XmlError::Write(e.to_string()))?;

        if self.kind().is_root() {
            Ok(format!("{XML_HEADER}{fragment}"))
        } else {
            Ok(fragment)
        }
    }
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let name = element.name();

    // Escape `& < > " '` in both attribute values and text
    let mut start = BytesStart::new(name);
    for (key, value) in element.attributes() {
        start.push_attribute((key.as_bytes(), escape(value.as_str()).as_bytes()));
    }
    writer
        .write_event(Event::Start(start))
        .map_err(|e| XmlError::Write(e.to_string()))?;

    if let Some(body) = element.body() {
        writer
            .write_event(Event::Text(BytesText::from_escaped(escape(body))))
            .map_err(|e| XmlError::Write(e.to_string()))?;
    }

    for child in element.children() {
        write_element(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| XmlError::Write(e.to_string()))?;
    Ok(())
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xml = self.to_xml().map_err(|_| fmt::Error)?;
        f.write_str(&xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::Attributes;

    #[test]
    fn test_response_with_play() {
        let mut response = Element::response();
        response
            .add(Element::play("http://x/a.mp3", Attributes::new()).expect("play"))
            .expect("add play");

        assert_eq!(
            response.to_xml().expect("serialize"),
            concat!(
                r#"<?xml version="1.0" encoding="utf-8" ?>"#,
                "<Response><Play>http://x/a.mp3</Play></Response>",
            )
        );
    }

    #[test]
    fn test_leaf_without_body() {
        let hangup = Element::hangup(Attributes::new().set("reason", "busy")).expect("hangup");
        assert_eq!(hangup.to_xml().expect("serialize"), r#"<Hangup reason="busy"></Hangup>"#);
    }

    #[test]
    fn test_empty_response() {
        assert_eq!(
            Element::response().to_string(),
            r#"<?xml version="1.0" encoding="utf-8" ?><Response></Response>"#
        );
    }

    #[test]
    fn test_header_only_at_root() {
        let mut response = Element::response();
        let pre_answer = response
            .add(Element::pre_answer(Attributes::new()).expect("pre_answer"))
            .expect("add pre_answer");
        pre_answer
            .add(Element::speak("Please wait", Attributes::new()).expect("speak"))
            .expect("add speak");

        let xml = response.to_xml().expect("serialize");
        assert_eq!(xml.matches("<?xml").count(), 1);
        assert!(xml.starts_with(XML_HEADER));

        let fragment = response.children()[0].to_xml().expect("serialize fragment");
        assert_eq!(fragment, "<PreAnswer><Speak>Please wait</Speak></PreAnswer>");
    }

    #[test]
    fn test_body_is_escaped() {
        let speak = Element::speak(r#"Tom & "Jerry" <it's>"#, Attributes::new()).expect("speak");
        assert_eq!(
            speak.to_xml().expect("serialize"),
            "<Speak>Tom &amp; &quot;Jerry&quot; &lt;it&apos;s&gt;</Speak>"
        );
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let redirect = Element::redirect(
            "http://x/next?a=1&b=2",
            Attributes::new().set("method", "get"),
        )
        .expect("redirect");
        assert_eq!(
            redirect.to_xml().expect("serialize"),
            r#"<Redirect method="GET">http://x/next?a=1&amp;b=2</Redirect>"#
        );

        let user = Element::user(
            "sip:bob@example.com",
            Attributes::new().set("sipHeaders", "a=\"1\""),
        )
        .expect("user");
        assert_eq!(
            user.to_xml().expect("serialize"),
            r#"<User sipHeaders="a=&quot;1&quot;">sip:bob@example.com</User>"#
        );
    }

    #[test]
    fn test_attributes_in_insertion_order() {
        let dial = Element::dial(
            Attributes::new()
                .set("timeout", 20)
                .set("action", "http://x/dial")
                .set("hangupOnStar", true),
        )
        .expect("dial");
        assert_eq!(
            dial.to_xml().expect("serialize"),
            r#"<Dial timeout="20" action="http://x/dial" hangupOnStar="true"></Dial>"#
        );
    }
}
