use crate::encode::percent_encode;
use crate::signature::ParamList;

/// Assembles the `OAuth ...` header value from the signed parameter set and
/// the computed signature.
///
/// Pairs appear in the same encoded-key order the signature was computed
/// over; `oauth_signature` is always appended last since it did not exist
/// when the set was sorted.
pub fn authorization_header(params: &ParamList<'_>, signature: &str) -> String {
    let mut pairs = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>();
    pairs.sort();
    let mut header = String::from("OAuth ");
    for (key, value) in pairs {
        header.push_str(&format!("{}=\"{}\", ", key, value));
    }
    header.push_str(&format!("oauth_signature=\"{}\"", percent_encode(signature)));
    header
}
