/*
[INPUT]:  Callback URIs, parameter maps and signatures
[OUTPUT]: Test results for callback signature validation
[POS]:    Integration tests - request signature checks
[UPDATE]: When the signing scheme changes
*/

use std::collections::BTreeMap;

use plivo_adapter::{PlivoClient, compute_signature, validate_signature};
use plivo_adapter::http::canonical_string;

const SIGNED_URI: &str = "https://example.com/answer/";
const SIGNED_TOKEN: &str = "MAXXXXXXXXXXXXXXXXXX";

fn callback_params() -> BTreeMap<&'static str, &'static str> {
    BTreeMap::from([
        ("From", "14155551234"),
        ("CallUUID", "1234"),
        ("Digits", "42"),
    ])
}

#[test]
fn test_canonical_string_order() {
    assert_eq!(
        canonical_string("https://x/", [("b", "2"), ("a", "1")]),
        "https://x/a1b2"
    );
}

#[test]
fn test_reference_vector() {
    assert_eq!(
        compute_signature("https://x/", [("b", "2"), ("a", "1")], "s"),
        "58oD/XmdLS60g3e72GGerhwyZvU="
    );
    assert!(validate_signature(
        "https://x/",
        [("b", "2"), ("a", "1")],
        "58oD/XmdLS60g3e72GGerhwyZvU=",
        "s"
    ));
}

#[test]
fn test_mutated_parameter_fails() {
    assert_eq!(
        compute_signature("https://x/", [("a", "1"), ("b", "3")], "s"),
        "elUWQFKUvGV7SOqt2zzER/OluGQ="
    );
    assert!(!validate_signature(
        "https://x/",
        [("a", "1"), ("b", "3")],
        "58oD/XmdLS60g3e72GGerhwyZvU=",
        "s"
    ));
}

#[test]
fn test_callback_signature() {
    let uri = SIGNED_URI;
    let signature = "VIT0/TK/j3jideg7G3yco2Jjx48=";

    assert!(PlivoClient::validate_signature(uri, callback_params(), signature, SIGNED_TOKEN));

    let client = PlivoClient::new(SIGNED_TOKEN, SIGNED_TOKEN).expect("client init");
    assert!(client.verify_callback(uri, callback_params(), signature));

    assert!(!PlivoClient::validate_signature(
        "https://example.com/answer",
        callback_params(),
        signature,
        SIGNED_TOKEN
    ));
}

#[test]
fn test_empty_params_sign_uri_only() {
    let empty: [(&str, &str); 0] = [];
    let signature = compute_signature("https://x/", empty, "s");
    assert!(validate_signature("https://x/", empty, &signature, "s"));
    assert!(!validate_signature("https://x/?", empty, &signature, "s"));
}
