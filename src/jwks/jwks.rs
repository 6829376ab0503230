//! JWKS (JSON Web Key Set) parsing and lookup

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::jwks::{Jwk, KeySetResolver};
use crate::keys::Key;
use serde::{Deserialize, Serialize};

/// JSON Web Key Set (JWKS)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JwkSet {
    /// The keys in the set
    pub keys: Vec<Jwk>,
}

impl JwkSet {
    /// Parse a JWKS document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Jwks(format!("invalid jwks json: {e}")))
    }

    /// Parse a JWKS document from raw bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::Jwks(format!("invalid jwks json: {e}")))
    }

    /// Find the key with the given `kid`
    ///
    /// When several keys share the `kid`, the first one wins and a warning is
    /// logged.
    pub fn find_key_by_kid(&self, kid: &str) -> Result<&Jwk> {
        let mut matches = self.keys.iter().filter(|k| k.kid.as_deref() == Some(kid));
        let first = matches
            .next()
            .ok_or_else(|| Error::KeyIdNotFound(kid.to_string()))?;

        if matches.next().is_some() {
            tracing::warn!(kid, "multiple keys found with kid, using first match");
        }
        Ok(first)
    }
}

impl KeySetResolver for JwkSet {
    fn resolve(&self, kid: &str, algorithm: AlgorithmId) -> Result<Key> {
        self.find_key_by_kid(kid)?.to_key(algorithm)
    }
}
