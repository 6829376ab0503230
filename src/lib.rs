//! # jwtseal - Signed JSON Web Tokens with EdDSA and RSA
//!
//! > Build, sign, decode and verify compact JSON Web Tokens.
//!
//! **jwtseal** signs tokens with Ed25519 (`EdDSA`) and verifies them with
//! Ed25519 or RSA PKCS#1 v1.5 (`RS256`, `RS384`, `RS512`). Verification is a
//! fixed pipeline configured up front and run in one call, so a token is never
//! handed back half-checked.
//!
//! ## Overview
//!
//! A compact token is three unpadded Base64URL segments joined by `.`: a JSON
//! header, a JSON claims object and a signature over the first two segments
//! exactly as they were transmitted. Claims are any serde type; the registered
//! claims (`iss`, `sub`, `aud`, `exp`, `nbf`, `iat`, `jti`) are read through
//! the [`Claims`] trait, usually by flattening [`RegisteredClaims`] into the
//! application's own struct.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtseal::*;
//!
//! let signing_key = SigningKey::ed25519_from_pkcs8_base64(PRIVATE_KEY)?;
//! let raw = Token::new(claims).signed_string(&signing_key)?;
//!
//! let registry = AlgorithmRegistry::new();
//! let token: Token<MyClaims> = TokenVerifier::new(&registry, AlgorithmId::EdDSA)
//!     .expect_claims(ExpectedClaims::new().issuer("accounts.example.com").audience("client-app"))
//!     .verify(&raw, &signing_key.public_key())?;
//!
//! println!("Subject: {:?}", token.claims().subject());
//! ```
//!
//! ## Verification Flow
//!
//! ```text
//! raw string
//!     │ decode_token()
//!     ▼
//! Token (header, claims, signature; valid = false)
//!     │ header alg == expected algorithm
//!     ▼
//!     │ signature over "header.claims"
//!     ▼
//!     │ claims against ExpectedClaims
//!     ▼
//! Token (valid = true)
//! ```
//!
//! Any failure ends the pipeline with an [`Error`]. The algorithm check comes
//! before any cryptography, so a token announcing `"alg":"none"` or a
//! different algorithm is rejected without touching the key.
//!
//! ## Decoding Without Verifying
//!
//! [`decode_token`] only parses. When the header or claims JSON fails to
//! parse, the returned [`DecodeError`] still carries a [`PartialToken`] with
//! the raw segments and whatever did decode, which helps diagnostics. Nothing
//! decoded this way is trustworthy until verified.
//!
//! ## Claims Validation
//!
//! [`validate_claims`] runs every check and reports all failures together:
//!
//! - `exp`, `nbf`, `iat` are required; now must not be past `exp`, before
//!   `nbf` or before `iat`
//! - `iss` is required and must equal the expected issuer
//! - `sub` must equal the expected subject when one is set
//! - `aud` must share at least one value with the expected audiences
//!
//! ## Keys
//!
//! - [`SigningKey`]: Ed25519 or RSA private key from PKCS#8 DER or Base64
//! - [`Key`]: Ed25519 or RSA public key from SPKI DER or Base64, raw bytes,
//!   or a JWK
//! - [`JwkSet`]: a JWKS document resolving keys by `kid`
//!
//! ## Features
//!
//! - **EdDSA** (always enabled)
//! - **`rsa`** (default): RS256, RS384, RS512
//! - **`remote`**: fetch a JWKS document through a caller-provided HTTP client
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515) - JSON Web Signature (JWS)
//! - [RFC 7517](https://datatracker.ietf.org/doc/html/rfc7517) - JSON Web Key (JWK)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519) - JSON Web Token (JWT)
//! - [RFC 8037](https://datatracker.ietf.org/doc/html/rfc8037) - EdDSA for JOSE

// Core modules
pub mod error;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Claims and validation
pub mod claims;

// Token types
pub mod token;

// Verification pipeline (main public API)
pub mod verifier;

// Key sets
pub mod jwks;

// Remote fetching
#[cfg(feature = "remote")]
pub mod remote;

// ============================================================================
// PUBLIC API
// ============================================================================

// Main flow types
pub use token::{decode_token, split_token, DecodeError, PartialToken, Token, TokenHeader};
pub use verifier::{verify_token, TokenVerifier};

// Claims
pub use claims::{
    validate_claims, validate_claims_at, Claims, ExpectedClaims, NumericDate, RegisteredClaims,
};

// Supporting types for advanced usage
pub use algorithm::{Algorithm, AlgorithmId, AlgorithmRegistry};
pub use error::{ClaimError, ClaimErrors, Error, Malformed, Result, Segment};
pub use jwks::{Jwk, JwkSet, KeySetResolver};
pub use keys::{Key, SigningKey};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SessionClaims {
        #[serde(flatten)]
        registered: RegisteredClaims,
        role: String,
    }

    impl Claims for SessionClaims {
        fn registered(&self) -> &RegisteredClaims {
            &self.registered
        }
    }

    fn signing_key() -> SigningKey {
        SigningKey::ed25519_from_pkcs8_base64(include_str!(
            "../tests/fixtures/ed25519_private_pkcs8.b64"
        ))
        .unwrap()
    }

    #[test]
    fn test_full_flow_eddsa() {
        let now = chrono::Utc::now();
        let claims = SessionClaims {
            registered: RegisteredClaims {
                issuer: Some("https://example.com".to_string()),
                subject: Some("user123".to_string()),
                audience: vec!["my-api".to_string()],
                expires_at: Some(NumericDate::new(now + chrono::Duration::hours(1))),
                not_before: Some(NumericDate::new(now)),
                issued_at: Some(NumericDate::new(now)),
                id: None,
            },
            role: "admin".to_string(),
        };

        let key = signing_key();
        let raw = Token::new(claims.clone()).signed_string(&key).unwrap();

        let public_key = Key::ed25519_from_spki_base64(include_str!(
            "../tests/fixtures/ed25519_public_spki.b64"
        ))
        .unwrap();
        let expected = ExpectedClaims::new()
            .issuer("https://example.com")
            .subject("user123")
            .audience("my-api");

        let token: Token<SessionClaims> = verify_token(&raw, &public_key, &expected).unwrap();
        assert!(token.is_valid());
        assert_eq!(token.claims().role, "admin");
        assert_eq!(token.claims().issuer(), Some("https://example.com"));
        assert_eq!(token.header().algorithm(), Some("EdDSA"));
    }

    #[test]
    fn test_none_algorithm_rejected() {
        let token_str = format!(
            "{}.{}.",
            utils::base64url::encode(r#"{"alg":"none"}"#),
            utils::base64url::encode(r#"{"iss":"test"}"#),
        );

        let parsed = decode_token::<RegisteredClaims>(&token_str).unwrap();
        assert!(matches!(
            parsed.header().parse_algorithm(),
            Err(Error::AlgorithmUnsupported(_))
        ));

        let result = verify_token::<RegisteredClaims>(
            &token_str,
            &signing_key().public_key(),
            &ExpectedClaims::new(),
        );
        assert!(matches!(result, Err(Error::AlgorithmMismatch { .. })));
    }
}
