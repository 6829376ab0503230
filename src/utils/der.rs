//! DER helpers for public key material
//!
//! Built on the RustCrypto `der` and `spki` crates. ring verifies RSA signatures
//! against a PKCS#1 `RSAPublicKey`, and Ed25519 signatures against the raw
//! 32-byte point, so these helpers produce exactly those encodings.

use crate::error::{Error, Result};
use der::Decode;
use spki::{ObjectIdentifier, SubjectPublicKeyInfoRef};

#[cfg(feature = "rsa")]
use der::{asn1::UintRef, Encode, Sequence};

/// id-Ed25519 (RFC 8410)
pub(crate) const ED25519_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

/// rsaEncryption (RFC 8017)
pub(crate) const RSA_ENCRYPTION_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// Largest RSA modulus accepted from a JWK, in bytes
#[cfg(feature = "rsa")]
const MAX_RSA_MODULUS_SIZE: usize = 1024;

fn key_error(operation: &str, details: impl std::fmt::Display) -> Error {
    Error::KeyInvalid(format!("{operation}: {details}"))
}

/// RSAPublicKey ::= SEQUENCE {
///     modulus           INTEGER,  -- n
///     publicExponent    INTEGER   -- e
/// }
#[cfg(feature = "rsa")]
#[derive(Sequence)]
struct RsaPublicKey<'a> {
    modulus: UintRef<'a>,
    public_exponent: UintRef<'a>,
}

/// Build a DER-encoded PKCS#1 RSA public key from big-endian modulus and exponent
#[cfg(feature = "rsa")]
pub(crate) fn rsa_public_key_from_n_e(n: &[u8], e: &[u8]) -> Result<Vec<u8>> {
    if n.is_empty() || e.is_empty() {
        return Err(key_error("rsa key missing n or e", "empty component"));
    }
    if n.len() > MAX_RSA_MODULUS_SIZE {
        return Err(key_error(
            "rsa modulus too large",
            format!("{} bytes (maximum: {MAX_RSA_MODULUS_SIZE} bytes)", n.len()),
        ));
    }

    let rsa_pubkey = RsaPublicKey {
        modulus: UintRef::new(n).map_err(|e| key_error("failed to encode rsa modulus", e))?,
        public_exponent: UintRef::new(e)
            .map_err(|e| key_error("failed to encode rsa exponent", e))?,
    };

    rsa_pubkey
        .to_der()
        .map_err(|e| key_error("failed to encode rsa public key", e))
}

/// Split a DER SubjectPublicKeyInfo into its algorithm OID and key bytes
pub(crate) fn parse_spki(der: &[u8]) -> Result<(ObjectIdentifier, Vec<u8>)> {
    let spki = SubjectPublicKeyInfoRef::from_der(der)
        .map_err(|e| key_error("invalid SubjectPublicKeyInfo", e))?;
    let key = spki
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| key_error("invalid SubjectPublicKeyInfo", "unaligned bit string"))?;
    Ok((spki.algorithm.oid, key.to_vec()))
}

/// Human readable key family for an algorithm OID
pub(crate) fn oid_key_type(oid: &ObjectIdentifier) -> String {
    if *oid == ED25519_OID {
        "Ed25519".to_string()
    } else if *oid == RSA_ENCRYPTION_OID {
        "RSA".to_string()
    } else {
        oid.to_string()
    }
}
