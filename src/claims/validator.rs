use crate::claims::{Claims, ExpectedClaims};
use crate::error::{ClaimError, ClaimErrors, Result};
use chrono::{DateTime, Utc};

/// Validate the registered claims against `expected` at the current time
///
/// See [`validate_claims_at`].
pub fn validate_claims<C: Claims + ?Sized>(claims: &C, expected: &ExpectedClaims) -> Result<()> {
    validate_claims_at(claims, expected, Utc::now())
}

/// Validate the registered claims against `expected` at instant `now`
///
/// All six registered claims are required. Every check runs, and every
/// violation is reported together in [`Error::ClaimsInvalid`](crate::Error::ClaimsInvalid):
///
/// - `exp`: rejected when `now` is after it
/// - `nbf`: rejected when `now` is before it
/// - `iat`: rejected when `now` is before it
/// - `iss`: must equal the expected issuer
/// - `sub`: must equal the expected subject, unless that is empty
/// - `aud`: must share at least one entry with the expected audience
pub fn validate_claims_at<C: Claims + ?Sized>(
    claims: &C,
    expected: &ExpectedClaims,
    now: DateTime<Utc>,
) -> Result<()> {
    let mut errors = ClaimErrors::default();

    match claims.expiration_time() {
        None => errors.push(ClaimError::ExpirationRequired),
        Some(exp) if now > exp.as_datetime() => errors.push(ClaimError::Expired),
        Some(_) => {}
    }

    match claims.not_before() {
        None => errors.push(ClaimError::NotBeforeRequired),
        Some(nbf) if now < nbf.as_datetime() => errors.push(ClaimError::NotValidYet),
        Some(_) => {}
    }

    match claims.issued_at() {
        None => errors.push(ClaimError::IssuedAtRequired),
        Some(iat) if now < iat.as_datetime() => errors.push(ClaimError::IssuedInFuture),
        Some(_) => {}
    }

    match claims.issuer() {
        None | Some("") => errors.push(ClaimError::IssuerRequired),
        Some(iss) if iss != expected.issuer => errors.push(ClaimError::IssuerMismatch),
        Some(_) => {}
    }

    match claims.subject() {
        None | Some("") => errors.push(ClaimError::SubjectRequired),
        Some(sub) if !expected.subject.is_empty() && sub != expected.subject => {
            errors.push(ClaimError::SubjectMismatch)
        }
        Some(_) => {}
    }

    let audience = claims.audience();
    if audience.is_empty() {
        errors.push(ClaimError::AudienceRequired);
    } else if !expected.audience.iter().any(|aud| audience.contains(aud)) {
        errors.push(ClaimError::AudienceMismatch);
    }

    errors.into_result()
}
