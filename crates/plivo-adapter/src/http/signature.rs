/*
[INPUT]:  Callback URI, callback parameters, X-Plivo-Signature header, auth token
[OUTPUT]: Recomputed base64 HMAC-SHA1 signature and match result
[POS]:    HTTP layer - verification of signed Plivo callbacks
[UPDATE]: When changing the canonical string or signing algorithm
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::http::PlivoClient;

type HmacSha1 = Hmac<Sha1>;

/// Canonical string: the URI followed by `key` + `value` for every
/// parameter, keys in ascending byte order.
pub fn canonical_string<I, K, V>(uri: &str, params: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut pairs: Vec<(K, V)> = params.into_iter().collect();
    pairs.sort_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()));

    let mut canonical = uri.to_string();
    for (key, value) in &pairs {
        canonical.push_str(key.as_ref());
        canonical.push_str(value.as_ref());
    }
    canonical
}

/// Compute the base64 HMAC-SHA1 signature Plivo sends with a callback
pub fn compute_signature<I, K, V>(uri: &str, params: I, auth_token: &str) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let canonical = canonical_string(uri, params);
    let mut mac = HmacSha1::new_from_slice(auth_token.as_bytes()).expect("HMAC key length");
    mac.update(canonical.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}

/// Check a callback signature against the recomputed value
///
/// The comparison is a plain string equality.
pub fn validate_signature<I, K, V>(uri: &str, params: I, signature: &str, auth_token: &str) -> bool
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    compute_signature(uri, params, auth_token) == signature
}

impl PlivoClient {
    /// Same as the free [`validate_signature`], for callers without a client
    pub fn validate_signature<I, K, V>(
        uri: &str,
        params: I,
        signature: &str,
        auth_token: &str,
    ) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        validate_signature(uri, params, signature, auth_token)
    }

    /// Check a callback signature with this client's auth token
    pub fn verify_callback<I, K, V>(&self, uri: &str, params: I, signature: &str) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        validate_signature(uri, params, signature, &self.credentials().auth_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_canonical_string_sorts_keys() {
        let params = [("b", "2"), ("a", "1")];
        assert_eq!(canonical_string("https://x/", params), "https://x/a1b2");
    }

    #[test]
    fn test_compute_signature_known_value() {
        let params = [("b", "2"), ("a", "1")];
        assert_eq!(
            compute_signature("https://x/", params, "s"),
            "58oD/XmdLS60g3e72GGerhwyZvU="
        );
    }

    #[test]
    fn test_validate_signature() {
        let mut params = HashMap::new();
        params.insert("a".to_string(), "1".to_string());
        params.insert("b".to_string(), "2".to_string());
        assert!(validate_signature("https://x/", &params, "58oD/XmdLS60g3e72GGerhwyZvU=", "s"));

        params.insert("b".to_string(), "3".to_string());
        assert!(!validate_signature("https://x/", &params, "58oD/XmdLS60g3e72GGerhwyZvU=", "s"));
    }

    #[test]
    fn test_validate_signature_wrong_token() {
        let params = [("a", "1"), ("b", "2")];
        assert!(!validate_signature("https://x/", params, "58oD/XmdLS60g3e72GGerhwyZvU=", "t"));
    }

    #[test]
    fn test_verify_callback_uses_client_token() {
        let client = PlivoClient::new("MAID", "s").unwrap();
        assert!(client.verify_callback(
            "https://x/",
            [("a", "1"), ("b", "2")],
            "58oD/XmdLS60g3e72GGerhwyZvU="
        ));
    }
}
