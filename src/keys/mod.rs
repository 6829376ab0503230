//! Key material for signing and verification
//!
//! Public keys ([`Key`]) verify, private keys ([`SigningKey`]) sign. Both are
//! typed by key family so an algorithm can refuse a key of the wrong kind before
//! any cryptography runs.

use crate::error::{Error, Result};
use crate::utils::der::{self, ED25519_OID};
use base64::{engine::general_purpose::STANDARD, Engine};
use ring::signature::{Ed25519KeyPair, KeyPair};
use std::fmt;

#[cfg(feature = "rsa")]
use crate::utils::der::RSA_ENCRYPTION_OID;
#[cfg(feature = "rsa")]
use ring::signature::RsaKeyPair;

/// Length of an Ed25519 public key in bytes
pub const ED25519_PUBLIC_KEY_LEN: usize = 32;

fn decode_standard_base64(encoded: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(encoded.trim())
        .map_err(|e| Error::KeyInvalid(format!("key is not valid base64: {e}")))
}

fn spki_mismatch(expected: &str, oid: &spki::ObjectIdentifier) -> Error {
    Error::KeyTypeMismatch {
        algorithm: expected.to_string(),
        expected: expected.to_string(),
        actual: der::oid_key_type(oid),
    }
}

/// A public key that can be used for signature verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Ed25519 public key for EdDSA
    Ed25519(Ed25519PublicKey),

    /// RSA public key for RS256/RS384/RS512
    #[cfg(feature = "rsa")]
    Rsa(RsaPublicKey),
}

impl Key {
    /// Create an Ed25519 public key from the raw public point
    pub fn ed25519(bytes: impl Into<Vec<u8>>) -> Self {
        Key::Ed25519(Ed25519PublicKey::new(bytes.into()))
    }

    /// Create an RSA public key from a DER-encoded PKCS#1 `RSAPublicKey`
    #[cfg(feature = "rsa")]
    pub fn rsa(der: impl Into<Vec<u8>>) -> Self {
        Key::Rsa(RsaPublicKey::new(der.into()))
    }

    /// Parse a DER-encoded SubjectPublicKeyInfo holding an Ed25519 or RSA key
    pub fn from_spki_der(der: &[u8]) -> Result<Self> {
        let (oid, key) = der::parse_spki(der)?;
        if oid == ED25519_OID {
            return Ok(Key::ed25519(key));
        }
        #[cfg(feature = "rsa")]
        {
            if oid == RSA_ENCRYPTION_OID {
                return Ok(Key::rsa(key));
            }
        }
        Err(spki_mismatch("Ed25519 or RSA", &oid))
    }

    /// Parse a standard-base64 SubjectPublicKeyInfo, the PEM body without armor
    pub fn from_spki_base64(encoded: &str) -> Result<Self> {
        Self::from_spki_der(&decode_standard_base64(encoded)?)
    }

    /// Parse a DER SubjectPublicKeyInfo that must hold an Ed25519 key
    pub fn ed25519_from_spki_der(der: &[u8]) -> Result<Self> {
        let (oid, key) = der::parse_spki(der)?;
        if oid != ED25519_OID {
            return Err(spki_mismatch("Ed25519", &oid));
        }
        Ok(Key::ed25519(key))
    }

    /// Parse a standard-base64 SubjectPublicKeyInfo that must hold an Ed25519 key
    pub fn ed25519_from_spki_base64(encoded: &str) -> Result<Self> {
        Self::ed25519_from_spki_der(&decode_standard_base64(encoded)?)
    }

    /// Parse a DER SubjectPublicKeyInfo that must hold an RSA key
    #[cfg(feature = "rsa")]
    pub fn rsa_from_spki_der(der: &[u8]) -> Result<Self> {
        let (oid, key) = der::parse_spki(der)?;
        if oid != RSA_ENCRYPTION_OID {
            return Err(spki_mismatch("RSA", &oid));
        }
        Ok(Key::rsa(key))
    }

    /// Parse a standard-base64 SubjectPublicKeyInfo that must hold an RSA key
    #[cfg(feature = "rsa")]
    pub fn rsa_from_spki_base64(encoded: &str) -> Result<Self> {
        Self::rsa_from_spki_der(&decode_standard_base64(encoded)?)
    }

    /// Create an RSA public key from big-endian modulus and exponent
    #[cfg(feature = "rsa")]
    pub fn rsa_from_components(n: &[u8], e: &[u8]) -> Result<Self> {
        Ok(Key::rsa(der::rsa_public_key_from_n_e(n, e)?))
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Ed25519(_) => "Ed25519",
            #[cfg(feature = "rsa")]
            Key::Rsa(_) => "RSA",
        }
    }

    /// Get as Ed25519 public key or return error
    pub fn as_ed25519(&self) -> Result<&Ed25519PublicKey> {
        match self {
            Key::Ed25519(key) => Ok(key),
            #[allow(unreachable_patterns)]
            _ => Err(Error::KeyTypeMismatch {
                algorithm: "EdDSA".to_string(),
                expected: "Ed25519".to_string(),
                actual: self.key_type().to_string(),
            }),
        }
    }

    /// Get as RSA public key or return error
    #[cfg(feature = "rsa")]
    pub fn as_rsa(&self) -> Result<&RsaPublicKey> {
        match self {
            Key::Rsa(key) => Ok(key),
            _ => Err(Error::KeyTypeMismatch {
                algorithm: "RSA".to_string(),
                expected: "RSA".to_string(),
                actual: self.key_type().to_string(),
            }),
        }
    }
}

/// Ed25519 public key (raw 32-byte point)
///
/// The length is not checked here; the EdDSA backend refuses a key of the
/// wrong size before verifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ed25519PublicKey {
    bytes: Vec<u8>,
}

impl Ed25519PublicKey {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// RSA public key (DER-encoded PKCS#1 `RSAPublicKey`)
#[cfg(feature = "rsa")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

#[cfg(feature = "rsa")]
impl RsaPublicKey {
    pub fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

/// A private key that can produce signatures
pub enum SigningKey {
    /// Ed25519 key pair for EdDSA
    Ed25519(Ed25519KeyPair),

    /// RSA key pair for RS256/RS384/RS512
    #[cfg(feature = "rsa")]
    Rsa(RsaKeyPair),
}

impl SigningKey {
    /// Parse an Ed25519 private key from PKCS#8 DER (v1 or v2)
    pub fn ed25519_from_pkcs8_der(der: &[u8]) -> Result<Self> {
        Ed25519KeyPair::from_pkcs8_maybe_unchecked(der)
            .map(SigningKey::Ed25519)
            .map_err(|e| Error::KeyInvalid(format!("invalid Ed25519 PKCS#8 key: {e}")))
    }

    /// Parse an Ed25519 private key from standard-base64 PKCS#8
    pub fn ed25519_from_pkcs8_base64(encoded: &str) -> Result<Self> {
        Self::ed25519_from_pkcs8_der(&decode_standard_base64(encoded)?)
    }

    /// Derive an Ed25519 private key from its 32-byte seed
    pub fn ed25519_from_seed(seed: &[u8]) -> Result<Self> {
        Ed25519KeyPair::from_seed_unchecked(seed)
            .map(SigningKey::Ed25519)
            .map_err(|e| Error::KeyInvalid(format!("invalid Ed25519 seed: {e}")))
    }

    /// Parse an RSA private key from PKCS#8 DER
    #[cfg(feature = "rsa")]
    pub fn rsa_from_pkcs8_der(der: &[u8]) -> Result<Self> {
        RsaKeyPair::from_pkcs8(der)
            .map(SigningKey::Rsa)
            .map_err(|e| Error::KeyInvalid(format!("invalid RSA PKCS#8 key: {e}")))
    }

    /// Parse an RSA private key from standard-base64 PKCS#8
    #[cfg(feature = "rsa")]
    pub fn rsa_from_pkcs8_base64(encoded: &str) -> Result<Self> {
        Self::rsa_from_pkcs8_der(&decode_standard_base64(encoded)?)
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            SigningKey::Ed25519(_) => "Ed25519",
            #[cfg(feature = "rsa")]
            SigningKey::Rsa(_) => "RSA",
        }
    }

    /// The matching public key
    pub fn public_key(&self) -> Key {
        match self {
            SigningKey::Ed25519(pair) => Key::ed25519(pair.public_key().as_ref()),
            #[cfg(feature = "rsa")]
            SigningKey::Rsa(pair) => Key::rsa(pair.public().as_ref()),
        }
    }

    /// Get as Ed25519 key pair or return error
    pub fn as_ed25519(&self) -> Result<&Ed25519KeyPair> {
        match self {
            SigningKey::Ed25519(pair) => Ok(pair),
            #[allow(unreachable_patterns)]
            _ => Err(Error::KeyTypeMismatch {
                algorithm: "EdDSA".to_string(),
                expected: "Ed25519".to_string(),
                actual: self.key_type().to_string(),
            }),
        }
    }

    /// Get as RSA key pair or return error
    #[cfg(feature = "rsa")]
    pub fn as_rsa(&self) -> Result<&RsaKeyPair> {
        match self {
            SigningKey::Rsa(pair) => Ok(pair),
            _ => Err(Error::KeyTypeMismatch {
                algorithm: "RSA".to_string(),
                expected: "RSA".to_string(),
                actual: self.key_type().to_string(),
            }),
        }
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("type", &self.key_type())
            .finish_non_exhaustive()
    }
}
