//! Errors for jwtseal
//!
//! Every failure is reported as a variant of [`Error`]. Callers branch on the
//! variant, not on message text.

use std::fmt;
use thiserror::Error;

/// jwtseal errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("token is malformed: {0}")]
    TokenMalformed(Malformed),

    #[error("failed to serialize {segment}: {message}")]
    Serialization { segment: Segment, message: String },

    #[error("token is already signed or decoded")]
    TokenSealed,

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("token algorithm '{found}' does not match expected algorithm '{expected}'")]
    AlgorithmMismatch { expected: String, found: String },

    #[error("algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    // ============================================================================
    // Signature and Key Errors
    // ============================================================================
    #[error("signature verification failed")]
    SignatureInvalid,

    #[error("key is invalid: {0}")]
    KeyInvalid(String),

    #[error("key type mismatch for algorithm '{algorithm}': expected {expected}, got {actual}")]
    KeyTypeMismatch {
        algorithm: String,
        expected: String,
        actual: String,
    },

    #[error("signing failed for algorithm '{0}'")]
    SigningFailed(String),

    // ============================================================================
    // Claims Errors
    // ============================================================================
    #[error("{0}")]
    ClaimsInvalid(ClaimErrors),

    // ============================================================================
    // Key Set Errors
    // ============================================================================
    #[error("token header has no key id (kid)")]
    KeyIdMissing,

    #[error("key with kid '{0}' not found")]
    KeyIdNotFound(String),

    #[error("jwks: {0}")]
    Jwks(String),

    #[cfg(feature = "remote")]
    #[error("remote error: {0}")]
    RemoteError(String),
}

/// The three segments of a compact token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Header,
    Claims,
    Signature,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Header => f.write_str("header"),
            Segment::Claims => f.write_str("claims"),
            Segment::Signature => f.write_str("signature"),
        }
    }
}

/// Why a token was rejected as malformed
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Malformed {
    #[error("expected exactly three segments separated by '.'")]
    SegmentCount,

    #[error("{0} segment is not unpadded base64url")]
    Base64(Segment),

    #[error("{segment} segment is not valid JSON: {message}")]
    Json { segment: Segment, message: String },
}

/// A single violated claims rule
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimError {
    #[error("'exp' claim is required")]
    ExpirationRequired,

    #[error("'nbf' claim is required")]
    NotBeforeRequired,

    #[error("'iat' claim is required")]
    IssuedAtRequired,

    #[error("'iss' claim is required")]
    IssuerRequired,

    #[error("'sub' claim is required")]
    SubjectRequired,

    #[error("'aud' claim is required")]
    AudienceRequired,

    #[error("token is expired")]
    Expired,

    #[error("token is not valid yet")]
    NotValidYet,

    #[error("token is issued in the future")]
    IssuedInFuture,

    #[error("issuer does not match expected issuer")]
    IssuerMismatch,

    #[error("subject does not match expected subject")]
    SubjectMismatch,

    #[error("audience does not match expected audience")]
    AudienceMismatch,
}

/// Every claims rule a token violated, in check order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClaimErrors(Vec<ClaimError>);

impl ClaimErrors {
    pub(crate) fn push(&mut self, error: ClaimError) {
        self.0.push(error);
    }

    /// Whether `error` is among the violations
    pub fn contains(&self, error: ClaimError) -> bool {
        self.0.contains(&error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClaimError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing was violated
    pub(crate) fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::ClaimsInvalid(self))
        }
    }
}

impl fmt::Display for ClaimErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ClaimErrors {}

impl From<Malformed> for Error {
    fn from(reason: Malformed) -> Self {
        Error::TokenMalformed(reason)
    }
}

/// Result type alias for jwtseal operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_errors_display_joins_messages() {
        let mut errors = ClaimErrors::default();
        errors.push(ClaimError::Expired);
        errors.push(ClaimError::IssuerMismatch);

        assert_eq!(
            errors.to_string(),
            "token is expired; issuer does not match expected issuer"
        );
    }

    #[test]
    fn test_empty_claim_errors_is_ok() {
        assert!(ClaimErrors::default().into_result().is_ok());
    }

    #[test]
    fn test_claims_invalid_keeps_every_kind() {
        let mut errors = ClaimErrors::default();
        errors.push(ClaimError::SubjectRequired);
        errors.push(ClaimError::AudienceMismatch);

        match errors.into_result() {
            Err(Error::ClaimsInvalid(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.contains(ClaimError::SubjectRequired));
                assert!(errors.contains(ClaimError::AudienceMismatch));
                assert!(!errors.contains(ClaimError::Expired));
            }
            other => panic!("expected ClaimsInvalid, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_display() {
        let error = Error::from(Malformed::Base64(Segment::Claims));
        assert_eq!(
            error.to_string(),
            "token is malformed: claims segment is not unpadded base64url"
        );
    }
}
