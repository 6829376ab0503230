use crate::algorithm::{AlgorithmId, AlgorithmRegistry};
use crate::claims::{validate_claims_at, Claims, ExpectedClaims};
use crate::error::{Error, Malformed, Result};
use crate::jwks::KeySetResolver;
use crate::keys::Key;
use crate::token::{decode_token, Token};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

/// Token verifier builder
///
/// Configures everything up front, then verifies any number of tokens:
///
/// 1. decode the three segments
/// 2. require the header `alg` to be the configured algorithm
/// 3. verify the signature over the original `header.claims` bytes
/// 4. validate the registered claims
/// 5. mark the token valid
///
/// The algorithm check runs before any key is looked up or any signature is
/// checked, so `"alg":"none"` and any other substitution fails early.
///
/// # Example
///
/// ```ignore
/// let registry = AlgorithmRegistry::new();
/// let token: Token<RegisteredClaims> = TokenVerifier::new(&registry, AlgorithmId::EdDSA)
///     .expect_claims(ExpectedClaims::new().issuer("accounts.example.com").audience("client-app"))
///     .verify(raw, &public_key)?;
/// assert!(token.is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct TokenVerifier<'r> {
    registry: &'r AlgorithmRegistry,
    algorithm: AlgorithmId,
    expected: ExpectedClaims,
    now: Option<DateTime<Utc>>,
    validate_claims: bool,
}

impl<'r> TokenVerifier<'r> {
    /// Verifier for tokens signed with `algorithm`
    pub fn new(registry: &'r AlgorithmRegistry, algorithm: AlgorithmId) -> Self {
        Self {
            registry,
            algorithm,
            expected: ExpectedClaims::default(),
            now: None,
            validate_claims: true,
        }
    }

    /// Claims the token must carry
    pub fn expect_claims(mut self, expected: ExpectedClaims) -> Self {
        self.expected = expected;
        self
    }

    /// Evaluate time claims at `now` instead of the current time
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Check the algorithm and signature only
    ///
    /// Use this only when the caller enforces its own claim rules.
    pub fn skip_claims_validation(mut self) -> Self {
        self.validate_claims = false;
        self
    }

    /// Verify `raw` with `key`
    pub fn verify<C>(&self, raw: &str, key: &Key) -> Result<Token<C>>
    where
        C: Claims + DeserializeOwned,
    {
        let token = self.decode::<C>(raw)?;
        self.finish(token, key)
    }

    /// Verify `raw` with the key its `kid` header names
    pub fn verify_with_resolver<C, R>(&self, raw: &str, resolver: &R) -> Result<Token<C>>
    where
        C: Claims + DeserializeOwned,
        R: KeySetResolver + ?Sized,
    {
        let token = self.decode::<C>(raw)?;

        let kid = token
            .header()
            .key_id()
            .ok_or_else(|| reject("key", Error::KeyIdMissing))?;
        let key = resolver
            .resolve(kid, self.algorithm)
            .map_err(|e| reject("key", e))?;

        self.finish(token, &key)
    }

    fn decode<C: DeserializeOwned>(&self, raw: &str) -> Result<Token<C>> {
        let token = decode_token::<C>(raw).map_err(|e| reject("decode", e.into()))?;

        let found = token.header().algorithm().unwrap_or_default();
        if found != self.algorithm.as_str() {
            return Err(reject(
                "algorithm",
                Error::AlgorithmMismatch {
                    expected: self.algorithm.to_string(),
                    found: found.to_string(),
                },
            ));
        }

        Ok(token)
    }

    fn finish<C: Claims>(&self, mut token: Token<C>, key: &Key) -> Result<Token<C>> {
        let algorithm = self
            .registry
            .get(self.algorithm.as_str())
            .map_err(|e| reject("algorithm", e))?;

        let signing_input = token
            .signing_input()
            .ok_or_else(|| reject("decode", Error::TokenMalformed(Malformed::SegmentCount)))?;
        algorithm
            .verify(&signing_input, token.signature(), key)
            .map_err(|e| reject("signature", e))?;

        if self.validate_claims {
            let now = self.now.unwrap_or_else(Utc::now);
            validate_claims_at(token.claims(), &self.expected, now)
                .map_err(|e| reject("claims", e))?;
        }

        token.mark_valid();
        tracing::trace!(algorithm = algorithm.name(), "token verified");
        Ok(token)
    }
}

fn reject(stage: &'static str, error: Error) -> Error {
    tracing::debug!(stage, %error, "token rejected");
    error
}

/// Verify an EdDSA token with `key` and validate its claims against `expected` now
///
/// Shorthand for a [`TokenVerifier`] over a registry holding only EdDSA.
pub fn verify_token<C>(raw: &str, key: &Key, expected: &ExpectedClaims) -> Result<Token<C>>
where
    C: Claims + DeserializeOwned,
{
    let registry = AlgorithmRegistry::empty().with(AlgorithmId::EdDSA);
    TokenVerifier::new(&registry, AlgorithmId::EdDSA)
        .expect_claims(expected.clone())
        .verify(raw, key)
}
