//! JSON Web Key Set (JWKS) module
//!
//! This module provides functionality for working with JSON Web Key Sets
//! (JWKS) as defined in [RFC 7517](https://datatracker.ietf.org/doc/html/rfc7517).
//! It parses JWKS documents, finds keys by key ID (`kid`) and converts
//! RSA and Ed25519 (OKP) keys into verification keys.

mod jwk;
#[allow(clippy::module_inception)]
mod jwks;
mod resolver;

pub use jwk::Jwk;
pub use jwks::JwkSet;
pub use resolver::KeySetResolver;
