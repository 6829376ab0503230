//! JWK (JSON Web Key) struct and conversion

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::utils::base64url;
use serde::{Deserialize, Serialize};

/// JSON Web Key (JWK) structure
///
/// All fields are optional to handle various JWK formats gracefully.
/// Validation happens during conversion to `Key`, not during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Jwk {
    /// Key type ("RSA", "OKP")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kty: Option<String>,
    /// Key ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// Algorithm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// Key use
    #[serde(rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    // RSA fields
    /// RSA modulus (Base64URL-encoded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    /// RSA exponent (Base64URL-encoded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    // OKP fields
    /// OKP curve name ("Ed25519")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    /// OKP public key (Base64URL-encoded)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
}

impl Jwk {
    /// Convert JWK to Key
    ///
    /// `algorithm` is the one from the token header and decides which key type is
    /// acceptable. A JWK whose own `alg` disagrees is still converted, with a warning.
    ///
    /// # Errors
    ///
    /// - [`Error::Jwks`] for a key not meant for signatures or a missing/undecodable member
    /// - [`Error::KeyTypeMismatch`] when `kty` does not fit `algorithm`
    pub fn to_key(&self, algorithm: AlgorithmId) -> Result<Key> {
        if let Some(key_use) = self.key_use.as_deref() {
            if key_use != "sig" {
                let message = format!("key use '{key_use}' is not valid for signatures");
                return Err(Error::Jwks(message));
            }
        }

        let expected_kty = match algorithm {
            AlgorithmId::EdDSA => "OKP",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS256 | AlgorithmId::RS384 | AlgorithmId::RS512 => "RSA",
        };

        match self.kty.as_deref() {
            Some(kty) if kty == expected_kty => {}
            Some(kty) => {
                return Err(Error::KeyTypeMismatch {
                    algorithm: algorithm.to_string(),
                    expected: expected_kty.to_string(),
                    actual: kty.to_string(),
                })
            }
            None => return Err(Error::Jwks("missing key type (kty)".to_string())),
        }

        if let Some(alg) = self.alg.as_deref() {
            if alg != algorithm.as_str() {
                tracing::warn!(
                    kid = self.kid.as_deref().unwrap_or_default(),
                    jwk_alg = alg,
                    token_alg = algorithm.as_str(),
                    "JWK alg does not match token algorithm"
                );
            }
        }

        match algorithm {
            AlgorithmId::EdDSA => self.to_ed25519_key(),
            #[cfg(feature = "rsa")]
            AlgorithmId::RS256 | AlgorithmId::RS384 | AlgorithmId::RS512 => self.to_rsa_key(),
        }
    }

    fn to_ed25519_key(&self) -> Result<Key> {
        match self.crv.as_deref() {
            Some("Ed25519") => {}
            Some(crv) => return Err(Error::Jwks(format!("unsupported OKP curve: {crv}"))),
            None => return Err(Error::Jwks("OKP key missing crv".to_string())),
        }

        let x = self.member("x", self.x.as_deref())?;
        Ok(Key::ed25519(x))
    }

    #[cfg(feature = "rsa")]
    fn to_rsa_key(&self) -> Result<Key> {
        let n = self.member("n", self.n.as_deref())?;
        let e = self.member("e", self.e.as_deref())?;
        Key::rsa_from_components(&n, &e)
    }

    fn member(&self, name: &str, value: Option<&str>) -> Result<Vec<u8>> {
        let Some(value) = value else {
            return Err(Error::Jwks(format!("key missing {name}")));
        };
        base64url::decode_bytes(value)
            .map_err(|e| Error::Jwks(format!("failed to decode {name}: {e}")))
    }
}
