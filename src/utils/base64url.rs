//! Base64URL encoding/decoding per RFC 4648
//!
//! URL-safe alphabet, padding never emitted and never accepted.

use crate::error::{Malformed, Segment};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

/// Encode bytes to an unpadded Base64URL string
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode a string to an unpadded Base64URL string
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode an unpadded Base64URL segment
///
/// Any character outside the URL-safe alphabet, any `=` and any non-canonical
/// trailing bits are rejected.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}

/// Decode one token segment, tagging failures with the segment name
pub(crate) fn decode_segment(input: &str, segment: Segment) -> Result<Vec<u8>, Malformed> {
    decode_bytes(input).map_err(|_| Malformed::Base64(segment))
}
