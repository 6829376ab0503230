use crate::error::{Error, Malformed, Segment};
use crate::token::{Token, TokenHeader};
use crate::utils::base64url;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// Split a compact token into its header, claims and signature segments
///
/// Exactly two `.` separators are required. A token with a fourth segment is
/// rejected outright, never truncated.
pub fn split_token(raw: &str) -> Option<[&str; 3]> {
    let (header, rest) = raw.split_once('.')?;
    let (claims, signature) = rest.split_once('.')?;
    if signature.contains('.') {
        return None;
    }
    Some([header, claims, signature])
}

/// Whatever was recovered from a token whose header or claims were not valid JSON
///
/// Segments are always present. `header` is `None` when the header JSON itself
/// failed. `claims` holds the claims as plain JSON when they parsed as JSON
/// but did not fit the requested claims type.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialToken {
    pub raw: String,
    pub raw_parts: [String; 3],
    pub header: Option<TokenHeader>,
    pub claims: Option<Value>,
}

/// A decode failure, with the partially decoded token when there is one
///
/// Split and base64 failures carry no partial token. JSON failures in the
/// header or claims carry one.
#[derive(Debug, Clone)]
pub struct DecodeError {
    error: Error,
    partial: Option<PartialToken>,
}

impl DecodeError {
    fn bare(reason: Malformed) -> Self {
        Self {
            error: Error::TokenMalformed(reason),
            partial: None,
        }
    }

    fn json(segment: Segment, error: serde_json::Error, partial: PartialToken) -> Self {
        Self {
            error: Error::TokenMalformed(Malformed::Json {
                segment,
                message: error.to_string(),
            }),
            partial: Some(partial),
        }
    }

    /// The failure
    pub fn error(&self) -> &Error {
        &self.error
    }

    /// The partially decoded token, for JSON failures
    pub fn partial(&self) -> Option<&PartialToken> {
        self.partial.as_ref()
    }

    pub fn into_parts(self) -> (Error, Option<PartialToken>) {
        (self.error, self.partial)
    }

    pub fn into_error(self) -> Error {
        self.error
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<DecodeError> for Error {
    fn from(error: DecodeError) -> Self {
        error.error
    }
}

/// Decode a compact token without checking its signature or claims
///
/// The result is never marked valid. Use a [`TokenVerifier`](crate::TokenVerifier)
/// to obtain a trusted token.
pub fn decode_token<C: DeserializeOwned>(raw: &str) -> Result<Token<C>, DecodeError> {
    let [header_b64, claims_b64, signature_b64] = split_token(raw)
        .ok_or_else(|| DecodeError::bare(Malformed::SegmentCount))?;

    let raw_parts = || {
        [
            header_b64.to_string(),
            claims_b64.to_string(),
            signature_b64.to_string(),
        ]
    };
    let partial = |header: Option<TokenHeader>, claims: Option<Value>| PartialToken {
        raw: raw.to_string(),
        raw_parts: raw_parts(),
        header,
        claims,
    };

    let header_json = base64url::decode_segment(header_b64, Segment::Header)
        .map_err(DecodeError::bare)?;
    let header: TokenHeader = serde_json::from_slice(&header_json)
        .map_err(|e| DecodeError::json(Segment::Header, e, partial(None, None)))?;

    let claims_json = base64url::decode_segment(claims_b64, Segment::Claims)
        .map_err(DecodeError::bare)?;
    let claims: C = serde_json::from_slice(&claims_json).map_err(|e| {
        let recovered = serde_json::from_slice(&claims_json).ok();
        DecodeError::json(Segment::Claims, e, partial(Some(header.clone()), recovered))
    })?;

    let signature = base64url::decode_segment(signature_b64, Segment::Signature)
        .map_err(DecodeError::bare)?;

    Ok(Token::decoded(raw.to_string(), raw_parts(), header, claims, signature))
}
