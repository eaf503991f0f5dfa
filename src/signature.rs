use std::borrow::Cow;
use std::collections::BTreeMap;

use http::Method;
use log::debug;
use ring::hmac;

use crate::encode::percent_encode;

/// The set of parameters covered by a signature. Keys are unique; ordering
/// for signing purposes is by the percent-encoded key, not the raw one.
pub type ParamList<'a> = BTreeMap<Cow<'a, str>, Cow<'a, str>>;

/// Encodes every key and value, sorts the pairs byte-wise by encoded key
/// and joins them as `key=value` pairs with `&`.
pub fn parameter_string(params: &ParamList<'_>) -> String {
    let mut pairs = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>();
    pairs.sort();
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// `UPPER(method) & encode(base_url) & encode(parameter_string)`.
///
/// `base_url` must carry no query string; request parameters travel in
/// `parameter_string` only.
pub fn signature_base_string(method: &Method, base_url: &str, parameter_string: &str) -> String {
    format!(
        "{}&{}&{}",
        method.as_str().to_ascii_uppercase(),
        percent_encode(base_url),
        percent_encode(parameter_string)
    )
}

/// `encode(consumer_secret) & encode(token_secret)`.
///
/// While no token secret is known (the request-token step) the key ends in
/// a bare trailing `&`.
pub fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret.unwrap_or(""))
    )
}

/// Computes the base64-encoded HMAC-SHA1 signature over the signature base
/// string. Pure function of its five inputs.
pub fn sign(
    method: &Method,
    base_url: &str,
    params: &ParamList<'_>,
    consumer_secret: &str,
    token_secret: Option<&str>,
) -> String {
    let normalized = parameter_string(params);
    let base = signature_base_string(method, base_url, &normalized);
    debug!("signature base string: {}", base);
    let key = hmac::Key::new(
        hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
        signing_key(consumer_secret, token_secret).as_bytes(),
    );
    base64::encode(hmac::sign(&key, base.as_bytes()).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param_list<'a>(pairs: &[(&'a str, &'a str)]) -> ParamList<'a> {
        pairs
            .iter()
            .map(|&(k, v)| (Cow::from(k), Cow::from(v)))
            .collect()
    }

    #[test]
    fn parameter_string_sorts_by_encoded_key() {
        let set = param_list(&[("b", "2"), ("a", "1"), ("c", "3")]);
        assert_eq!(parameter_string(&set), "a=1&b=2&c=3");
    }

    #[test]
    fn parameter_string_encodes_values() {
        let set = param_list(&[("status", "hello world")]);
        assert_eq!(parameter_string(&set), "status=hello%20world");
    }

    #[test]
    fn base_string_shape() {
        assert_eq!(
            signature_base_string(&Method::POST, "https://api.example.com/a", "a=1&b=2"),
            "POST&https%3A%2F%2Fapi.example.com%2Fa&a%3D1%26b%3D2"
        );
    }

    #[test]
    fn signing_key_without_token_secret_ends_in_ampersand() {
        assert_eq!(signing_key("secret", None), "secret&");
        assert_eq!(signing_key("secret", Some("")), "secret&");
    }

    #[test]
    fn signing_key_encodes_both_parts() {
        assert_eq!(signing_key("s&1", Some("t&2")), "s%261&t%262");
    }

    // https://tools.ietf.org/html/rfc5849#section-1.2, the initiate request
    #[test]
    fn rfc5849_request_token_vector() {
        let set = param_list(&[
            ("oauth_consumer_key", "dpf43f3p2l4k3l03"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "137131200"),
            ("oauth_nonce", "wIjqoS"),
            ("oauth_callback", "http://printer.example.com/ready"),
        ]);
        let signature = sign(
            &Method::POST,
            "https://photos.example.net/initiate",
            &set,
            "kd94hf93k423kf44",
            None,
        );
        assert_eq!(signature, "74KNZJeDHnMBp0EMJ9ZHt/XKycU=");
    }

    // https://tools.ietf.org/html/rfc5849#section-1.2, the photos request
    #[test]
    fn rfc5849_protected_resource_vector() {
        let set = param_list(&[
            ("file", "vacation.jpg"),
            ("size", "original"),
            ("oauth_consumer_key", "dpf43f3p2l4k3l03"),
            ("oauth_token", "nnch734d00sl2jdk"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "137131202"),
            ("oauth_nonce", "chapoH"),
        ]);
        let signature = sign(
            &Method::GET,
            "http://photos.example.net/photos",
            &set,
            "kd94hf93k423kf44",
            Some("pfkkdhi9sl3r4s00"),
        );
        assert_eq!(signature, "MdpQcU8iPSUjWoN/UDMsK2sui9I=");
    }

    #[test]
    fn deterministic_for_fixed_inputs() {
        let set = param_list(&[
            ("oauth_consumer_key", "key"),
            ("oauth_nonce", "fixed"),
            ("oauth_timestamp", "1000000000"),
        ]);
        let first = sign(&Method::POST, "https://example.com/x", &set, "cs", Some("ts"));
        let second = sign(&Method::POST, "https://example.com/x", &set, "cs", Some("ts"));
        assert_eq!(first, second);
    }
}
