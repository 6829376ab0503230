use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::{Key, SigningKey, ED25519_PUBLIC_KEY_LEN};
use ring::signature::{self, UnparsedPublicKey};

/// EdDSA over Ed25519 (RFC 8037)
///
/// The message is signed as-is; Ed25519 hashes internally. Signatures are
/// deterministic.
pub struct EdDSA;

impl Algorithm for EdDSA {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::EdDSA
    }

    fn sign(&self, signing_input: &str, key: &SigningKey) -> Result<Vec<u8>> {
        let key_pair = key.as_ed25519()?;
        Ok(key_pair.sign(signing_input.as_bytes()).as_ref().to_vec())
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        let public_key = key.as_ed25519()?;
        if public_key.as_bytes().len() != ED25519_PUBLIC_KEY_LEN {
            return Err(Error::KeyInvalid(format!(
                "Ed25519 public key must be {ED25519_PUBLIC_KEY_LEN} bytes, got {}",
                public_key.as_bytes().len()
            )));
        }

        UnparsedPublicKey::new(&signature::ED25519, public_key.as_bytes())
            .verify(signing_input.as_bytes(), signature)
            .map_err(|_| Error::SignatureInvalid)
    }
}
