/*
[INPUT]:  Plivo XML element vocabulary
[OUTPUT]: Element kinds with attribute whitelists and nesting grammar
[POS]:    XML layer - static per-kind tables
[UPDATE]: When Plivo adds elements, attributes or nesting rules
*/

use std::fmt;
use std::str::FromStr;

use super::error::XmlError;

/// Every element kind understood by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Response,
    Dial,
    Number,
    User,
    Play,
    Speak,
    GetDigits,
    Record,
    Hangup,
    Redirect,
    Wait,
    Conference,
    PreAnswer,
    Message,
    Dtmf,
}

const DIAL_ATTRIBUTES: &[&str] = &[
    "action",
    "method",
    "timeout",
    "hangupOnStar",
    "timeLimit",
    "callerId",
    "callerName",
    "confirmSound",
    "dialMusic",
    "confirmKey",
    "redirect",
    "callbackUrl",
    "callbackMethod",
    "digitsMatch",
    "digitsMatchBLeg",
    "sipHeaders",
];

const NUMBER_ATTRIBUTES: &[&str] =
    &["sendDigits", "sendOnPreanswer", "sendDigitsMode", "sipHeaders"];

const USER_ATTRIBUTES: &[&str] = &["sendDigits", "sendOnPreanswer", "sipHeaders"];

const PLAY_ATTRIBUTES: &[&str] = &["loop"];

const SPEAK_ATTRIBUTES: &[&str] = &["voice", "language", "loop"];

const GET_DIGITS_ATTRIBUTES: &[&str] = &[
    "action",
    "method",
    "timeout",
    "digitTimeout",
    "finishOnKey",
    "numDigits",
    "retries",
    "invalidDigitsSound",
    "validDigits",
    "playBeep",
    "redirect",
    "log",
];

const RECORD_ATTRIBUTES: &[&str] = &[
    "action",
    "method",
    "timeout",
    "finishOnKey",
    "maxLength",
    "playBeep",
    "recordSession",
    "startOnDialAnswer",
    "redirect",
    "fileFormat",
    "callbackUrl",
    "callbackMethod",
    "transcriptionType",
    "transcriptionUrl",
    "transcriptionMethod",
];

const HANGUP_ATTRIBUTES: &[&str] = &["schedule", "reason"];

const REDIRECT_ATTRIBUTES: &[&str] = &["method"];

const WAIT_ATTRIBUTES: &[&str] = &["length", "silence", "min_silence", "minSilence", "beep"];

const CONFERENCE_ATTRIBUTES: &[&str] = &[
    "muted",
    "beep",
    "startConferenceOnEnter",
    "endConferenceOnExit",
    "waitSound",
    "enterSound",
    "exitSound",
    "timeLimit",
    "hangupOnStar",
    "maxMembers",
    "record",
    "recordFileFormat",
    "action",
    "method",
    "redirect",
    "digitsMatch",
    "callbackUrl",
    "callbackMethod",
    "stayAlone",
    "floorEvent",
    "transcriptionType",
    "transcriptionUrl",
    "transcriptionMethod",
    "relayDTMF",
];

const MESSAGE_ATTRIBUTES: &[&str] = &["src", "dst", "type", "callbackMethod", "callbackUrl"];

const DTMF_ATTRIBUTES: &[&str] = &["async"];

const RESPONSE_NESTABLE: &[ElementKind] = &[
    ElementKind::Speak,
    ElementKind::Play,
    ElementKind::GetDigits,
    ElementKind::Record,
    ElementKind::Dial,
    ElementKind::Redirect,
    ElementKind::Wait,
    ElementKind::Hangup,
    ElementKind::PreAnswer,
    ElementKind::Conference,
    ElementKind::Dtmf,
    ElementKind::Message,
];

const DIAL_NESTABLE: &[ElementKind] = &[ElementKind::Number, ElementKind::User];

const PRE_ANSWER_NESTABLE: &[ElementKind] = &[
    ElementKind::Play,
    ElementKind::Speak,
    ElementKind::GetDigits,
    ElementKind::Wait,
    ElementKind::Redirect,
    ElementKind::Message,
    ElementKind::Dtmf,
];

impl ElementKind {
    /// All kinds, in declaration order
    pub const ALL: [ElementKind; 15] = [
        ElementKind::Response,
        ElementKind::Dial,
        ElementKind::Number,
        ElementKind::User,
        ElementKind::Play,
        ElementKind::Speak,
        ElementKind::GetDigits,
        ElementKind::Record,
        ElementKind::Hangup,
        ElementKind::Redirect,
        ElementKind::Wait,
        ElementKind::Conference,
        ElementKind::PreAnswer,
        ElementKind::Message,
        ElementKind::Dtmf,
    ];

    /// Tag name emitted in XML
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Response => "Response",
            ElementKind::Dial => "Dial",
            ElementKind::Number => "Number",
            ElementKind::User => "User",
            ElementKind::Play => "Play",
            ElementKind::Speak => "Speak",
            ElementKind::GetDigits => "GetDigits",
            ElementKind::Record => "Record",
            ElementKind::Hangup => "Hangup",
            ElementKind::Redirect => "Redirect",
            ElementKind::Wait => "Wait",
            ElementKind::Conference => "Conference",
            ElementKind::PreAnswer => "PreAnswer",
            ElementKind::Message => "Message",
            ElementKind::Dtmf => "DTMF",
        }
    }

    /// Attribute keys accepted by this kind
    pub fn valid_attributes(self) -> &'static [&'static str] {
        match self {
            ElementKind::Response | ElementKind::PreAnswer => &[],
            ElementKind::Dial => DIAL_ATTRIBUTES,
            ElementKind::Number => NUMBER_ATTRIBUTES,
            ElementKind::User => USER_ATTRIBUTES,
            ElementKind::Play => PLAY_ATTRIBUTES,
            ElementKind::Speak => SPEAK_ATTRIBUTES,
            ElementKind::GetDigits => GET_DIGITS_ATTRIBUTES,
            ElementKind::Record => RECORD_ATTRIBUTES,
            ElementKind::Hangup => HANGUP_ATTRIBUTES,
            ElementKind::Redirect => REDIRECT_ATTRIBUTES,
            ElementKind::Wait => WAIT_ATTRIBUTES,
            ElementKind::Conference => CONFERENCE_ATTRIBUTES,
            ElementKind::Message => MESSAGE_ATTRIBUTES,
            ElementKind::Dtmf => DTMF_ATTRIBUTES,
        }
    }

    /// Kinds that may be attached as children of this kind
    pub fn nestable(self) -> &'static [ElementKind] {
        match self {
            ElementKind::Response => RESPONSE_NESTABLE,
            ElementKind::Dial => DIAL_NESTABLE,
            ElementKind::PreAnswer => PRE_ANSWER_NESTABLE,
            _ => &[],
        }
    }

    /// What the body holds for kinds that cannot be built without one
    pub fn body_requirement(self) -> Option<&'static str> {
        match self {
            ElementKind::Message => Some("text"),
            ElementKind::Number => Some("number"),
            ElementKind::Play | ElementKind::Redirect => Some("url"),
            ElementKind::User => Some("user"),
            _ => None,
        }
    }

    /// Kinds whose element carries text content; the rest are always empty
    pub fn takes_body(self) -> bool {
        matches!(
            self,
            ElementKind::Number
                | ElementKind::User
                | ElementKind::Play
                | ElementKind::Speak
                | ElementKind::Redirect
                | ElementKind::Conference
                | ElementKind::Message
                | ElementKind::Dtmf
        )
    }

    pub fn accepts_attribute(self, key: &str) -> bool {
        self.valid_attributes().contains(&key)
    }

    pub fn can_nest(self, child: ElementKind) -> bool {
        self.nestable().contains(&child)
    }

    pub fn is_root(self) -> bool {
        self == ElementKind::Response
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = XmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| XmlError::UnknownElement(s.to_string()))
    }
}
