use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything outside `A-Z a-z 0-9 - . _ ~` (RFC 3986 section 2.3) is
/// escaped. Signatures are computed over this exact encoding; the looser
/// sets of general-purpose URL encoders produce headers the provider
/// rejects.
const STRICT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `input` with the strict unreserved set, uppercase hex.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, STRICT_ENCODE_SET).to_string()
}
